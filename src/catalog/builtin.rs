//! Built-in overlay tables.

use once_cell::sync::Lazy;

use super::tables::{NotificationOverlays, OverlayCatalog, PairedAccents};

// Pre-installed on some devices; only ever turned off.
const STOCK_DARK_THEME: &str = "com.android.systemui.theme.dark";

const NOTIFICATION_DARK_THEME: &str = "com.android.system.notification.dark";
const NOTIFICATION_BLACK_THEME: &str = "com.android.system.notification.black";

const DARK_THEMES: &[&str] = &[
    "com.android.system.theme.dark",
    "com.android.settings.theme.dark",
    "com.android.settings.intelligence.theme.dark",
    "com.android.sysui.theme.dark",
    "com.android.gboard.theme.dark",
];

const BLACK_THEMES: &[&str] = &[
    "com.android.system.theme.black",
    "com.android.settings.theme.black",
    "com.android.settings.intelligence.theme.black",
    "com.android.sysui.theme.black",
    "com.android.gboard.theme.black",
];

// Index 0 is the "no accent" slot and never names an installed overlay.
const ACCENTS: &[&str] = &[
    "default_accent",
    "com.accents.red",
    "com.accents.pink",
    "com.accents.purple",
    "com.accents.deeppurple",
    "com.accents.indigo",
    "com.accents.blue",
    "com.accents.lightblue",
    "com.accents.cyan",
    "com.accents.teal",
    "com.accents.green",
    "com.accents.lightgreen",
    "com.accents.lime",
    "com.accents.yellow",
    "com.accents.amber",
    "com.accents.orange",
    "com.accents.deeporange",
    "com.accents.brown",
    "com.accents.grey",
    "com.accents.bluegrey",
    "com.accents.black",
    "com.accents.white",
    "com.accents.userone",
    "com.accents.usertwo",
    "com.accents.userthree",
    "com.accents.userfour",
    "com.accents.userfive",
    "com.accents.usersix",
    "com.accents.userseven",
];

pub(super) static BUILTIN: Lazy<OverlayCatalog> = Lazy::new(|| OverlayCatalog {
    stock_dark_theme: STOCK_DARK_THEME.to_string(),
    notification: NotificationOverlays {
        dark: NOTIFICATION_DARK_THEME.to_string(),
        black: NOTIFICATION_BLACK_THEME.to_string(),
    },
    dark_themes: to_owned(DARK_THEMES),
    black_themes: to_owned(BLACK_THEMES),
    accents: to_owned(ACCENTS),
    paired_accents: PairedAccents::default(),
});

fn to_owned(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

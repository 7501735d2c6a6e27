//! Fixed presentation parameters of the dashboard.

/// Filled part of a progress bar.
pub const BAR_FULL: char = '█';

/// Empty part of a progress bar.
pub const BAR_EMPTY: char = '░';

/// Default progress bar length in characters.
pub const BAR_LENGTH: usize = 20;

/// Total width of the dashboard box, borders included.
pub const DASHBOARD_WIDTH: u16 = 70;

/// Horizontal padding on either side of the dashboard content.
pub const DASHBOARD_PADDING: u16 = 2;

/// Same as `UTF8_FULL` but with single-line header separators.
pub const DASHBOARD_PRESET: &str = "││──├─┼┤│─┼├┤┬┴┌┐└┘";

pub const TITLE: &str = "BLACKOUT KOSTENEFFIZIENZ";

pub const TIP: &str = "💡 TIP: Use multi-wallet transfers to increase your anonymity.";

/// Extra tip lines shown for single-recipient transfers.
pub const SINGLE_RECIPIENT_TIPS: [&str; 2] = [
    "   The optimized implementation results in only minimal additional costs.",
    "   Use --multi=addr1,addr2,... for multi-wallet transfers.",
];

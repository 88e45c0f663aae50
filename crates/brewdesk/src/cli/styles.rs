//! Styles for the brewdesk CLI.
//!
//! Rendering code asks for styles by meaning (a muted column, a low-stock
//! badge), never by color. The palette lives here, built once through
//! `once_cell::sync::Lazy`.
//!
//! `console` drops the escape codes on its own when stdout isn't a terminal
//! or `NO_COLOR` is set, so piped output and tests see plain text.

use brewdeskapp::records::{CustomerTier, OrderStatus};
use brewdeskapp::status::StockTag;
use console::Style;
use once_cell::sync::Lazy;

pub struct Theme {
    pub title: Style,
    pub header: Style,
    pub muted: Style,
    pub chip: Style,
    pub chip_selected: Style,
    pub money: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub info: Style,
    pub featured: Style,
}

pub static THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(245);
    Theme {
        title: Style::new().bold(),
        header: muted.clone().bold(),
        chip: muted.clone(),
        chip_selected: Style::new().black().on_color256(221),
        muted,
        money: Style::new().color256(108),
        success: Style::new().green(),
        warning: Style::new().yellow(),
        error: Style::new().red().bold(),
        info: Style::new().blue(),
        featured: Style::new().color256(214).bold(),
    }
});

pub fn order_status(status: OrderStatus) -> &'static Style {
    match status {
        OrderStatus::Pending => &THEME.warning,
        OrderStatus::Processing => &THEME.info,
        OrderStatus::Delivered => &THEME.success,
        OrderStatus::Canceled => &THEME.error,
    }
}

pub fn stock_tag(tag: StockTag) -> &'static Style {
    match tag {
        StockTag::Low => &THEME.error,
        StockTag::Warning => &THEME.warning,
        StockTag::Ok => &THEME.success,
    }
}

pub fn tier(tier: CustomerTier) -> &'static Style {
    match tier {
        CustomerTier::Bronze => &THEME.warning,
        CustomerTier::Silver => &THEME.muted,
        CustomerTier::Gold => &THEME.featured,
        CustomerTier::Platinum => &THEME.info,
    }
}

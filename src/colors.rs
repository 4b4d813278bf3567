use ansi_term::Style;

#[cfg(feature = "color")]
lazy_static! {
    pub static ref RED: Style = ansi_term::Color::Fixed(9).bold();
    pub static ref YELLOW: Style = ansi_term::Color::Fixed(11).bold();
    pub static ref CYAN: Style = ansi_term::Color::Fixed(13).bold();
    pub static ref WHITE: Style = ansi_term::Color::Fixed(15).bold();
}

#[cfg(not(feature = "color"))]
lazy_static! {
    pub static ref RED: Style = Style::new();
    pub static ref YELLOW: Style = Style::new();
    pub static ref CYAN: Style = Style::new();
    pub static ref WHITE: Style = Style::new();
}

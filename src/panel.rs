use std::fmt;

/// The demo panels the sidebar can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Homepage,
    GeologicalPeriods,
    UsCapitals,
    BiscayneBay,
    Crypto,
}

impl Panel {
    /// Sidebar order.
    pub const ALL: [Panel; 5] = [
        Panel::Homepage,
        Panel::GeologicalPeriods,
        Panel::UsCapitals,
        Panel::BiscayneBay,
        Panel::Crypto,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Panel::Homepage => "Homepage",
            Panel::GeologicalPeriods => "Geological Periods",
            Panel::UsCapitals => "United States Capitals",
            Panel::BiscayneBay => "Monitoring Biscayne Bay",
            Panel::Crypto => "Crypto",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

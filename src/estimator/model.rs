use std::fmt;

/// Upper bound applied by the quantity stepper.
pub const MAX_QUANTITY: u32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Seniority {
    Junior,
    Mid,
    Senior,
    Lead,
}

impl Seniority {
    pub const ALL: [Seniority; 4] = [
        Seniority::Junior,
        Seniority::Mid,
        Seniority::Senior,
        Seniority::Lead,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Seniority::Junior => "Junior",
            Seniority::Mid => "Mid",
            Seniority::Senior => "Senior",
            Seniority::Lead => "Lead",
        }
    }

    /// Inverse of `as_str`, used by the `<select>` change handler.
    pub fn from_label(label: &str) -> Option<Seniority> {
        Seniority::ALL.into_iter().find(|s| s.as_str() == label)
    }
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque identifier handed out by the estimator. Never reused within a session.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RoleId(String);

impl RoleId {
    pub(crate) fn new(raw: String) -> Self {
        RoleId(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub seniority: Seniority,
    pub quantity: u32,
    pub monthly_rate: u32,
}

impl Role {
    pub fn line_total(&self) -> u64 {
        self.quantity as u64 * self.monthly_rate as u64
    }
}

/// Sparse update for `Estimator::update_role`. `None` leaves the field alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoleUpdate {
    pub seniority: Option<Seniority>,
    pub quantity: Option<u32>,
    pub monthly_rate: Option<u32>,
}

impl RoleUpdate {
    pub fn seniority(seniority: Seniority) -> Self {
        RoleUpdate { seniority: Some(seniority), ..Default::default() }
    }

    pub fn quantity(quantity: u32) -> Self {
        RoleUpdate { quantity: Some(quantity), ..Default::default() }
    }

    pub fn monthly_rate(rate: u32) -> Self {
        RoleUpdate { monthly_rate: Some(rate), ..Default::default() }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Duration {
    OneMonth,
    ThreeMonths,
    #[default]
    SixMonths,
    TwelveMonths,
}

impl Duration {
    pub const ALL: [Duration; 4] = [
        Duration::OneMonth,
        Duration::ThreeMonths,
        Duration::SixMonths,
        Duration::TwelveMonths,
    ];

    pub fn months(&self) -> u32 {
        match self {
            Duration::OneMonth => 1,
            Duration::ThreeMonths => 3,
            Duration::SixMonths => 6,
            Duration::TwelveMonths => 12,
        }
    }

    pub fn short_label(&self) -> String {
        match self {
            Duration::OneMonth => "1 mo".to_string(),
            other => format!("{} mos", other.months()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WorkModel {
    #[default]
    FixedTeam,
    TimeAndMaterials,
    Retainer,
}

impl WorkModel {
    pub const ALL: [WorkModel; 3] = [
        WorkModel::FixedTeam,
        WorkModel::TimeAndMaterials,
        WorkModel::Retainer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkModel::FixedTeam => "Fixed team",
            WorkModel::TimeAndMaterials => "Time & Materials",
            WorkModel::Retainer => "Retainer",
        }
    }

    pub fn from_label(label: &str) -> Option<WorkModel> {
        WorkModel::ALL.into_iter().find(|m| m.as_str() == label)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Currency {
    #[default]
    Usd,
    Local,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Usd, Currency::Local];

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Local => "Local",
        }
    }

    pub fn from_label(label: &str) -> Option<Currency> {
        Currency::ALL.into_iter().find(|c| c.as_str() == label)
    }
}

/// Lenient integer parse for the rate field: leading digits after an optional
/// sign, anything else ignored. Negative and non-numeric input become 0.
pub fn parse_rate_input(text: &str) -> u32 {
    let trimmed = text.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: u64 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        match c.to_digit(10) {
            Some(d) => {
                seen_digit = true;
                value = (value * 10 + d as u64).min(u32::MAX as u64);
            }
            None => break,
        }
    }

    if negative || !seen_digit {
        0
    } else {
        value as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_input_takes_leading_integer() {
        assert_eq!(parse_rate_input("1200"), 1200);
        assert_eq!(parse_rate_input("  950 "), 950);
        assert_eq!(parse_rate_input("12abc"), 12);
        assert_eq!(parse_rate_input("+40"), 40);
        assert_eq!(parse_rate_input("7.9"), 7);
    }

    #[test]
    fn rate_input_coerces_garbage_to_zero() {
        assert_eq!(parse_rate_input(""), 0);
        assert_eq!(parse_rate_input("abc"), 0);
        assert_eq!(parse_rate_input("-300"), 0);
        assert_eq!(parse_rate_input("-"), 0);
    }

    #[test]
    fn rate_input_saturates_instead_of_overflowing() {
        assert_eq!(parse_rate_input("99999999999999999999"), u32::MAX);
    }

    #[test]
    fn labels_round_trip_through_selectors() {
        for s in Seniority::ALL {
            assert_eq!(Seniority::from_label(s.as_str()), Some(s));
        }
        assert_eq!(WorkModel::from_label("Time & Materials"), Some(WorkModel::TimeAndMaterials));
        assert_eq!(Currency::from_label("Local"), Some(Currency::Local));
        assert_eq!(Seniority::from_label("Principal"), None);
    }

    #[test]
    fn duration_defaults_to_six_months() {
        assert_eq!(Duration::default().months(), 6);
        assert_eq!(Duration::OneMonth.short_label(), "1 mo");
        assert_eq!(Duration::TwelveMonths.short_label(), "12 mos");
    }
}

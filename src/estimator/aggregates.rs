use super::catalog::US_RATES;
use super::model::{Duration, Role};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aggregates {
    pub monthly_cost: u64,
    pub total_cost: u64,
    pub us_equivalent_monthly_cost: u64,
    pub us_equivalent_total_cost: u64,
    /// Percentage saved versus US rates; 0 when there is nothing to compare.
    pub savings_percent: f64,
}

impl Aggregates {
    /// Nearest whole percent, halves rounded up (-2.5 becomes -2).
    pub fn savings_rounded(&self) -> i64 {
        (self.savings_percent + 0.5).floor() as i64
    }

    pub fn absolute_savings(&self) -> u64 {
        self.us_equivalent_total_cost.saturating_sub(self.total_cost)
    }
}

pub fn compute_aggregates(roles: &[Role], duration: Duration) -> Aggregates {
    let months = duration.months() as u64;

    let monthly_cost: u64 = roles.iter().map(Role::line_total).sum();
    let us_equivalent_monthly_cost: u64 = roles
        .iter()
        .map(|r| r.quantity as u64 * US_RATES.rate(r.seniority) as u64)
        .sum();

    let total_cost = monthly_cost * months;
    let us_equivalent_total_cost = us_equivalent_monthly_cost * months;

    let savings_percent = if us_equivalent_total_cost > 0 {
        (us_equivalent_total_cost as f64 - total_cost as f64) / us_equivalent_total_cost as f64 * 100.0
    } else {
        0.0
    };

    Aggregates {
        monthly_cost,
        total_cost,
        us_equivalent_monthly_cost,
        us_equivalent_total_cost,
        savings_percent,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BreakdownSlice {
    pub label: String,
    pub value: u64,
}

/// One slice per staffed role; roles with zero headcount are left out.
pub fn build_cost_breakdown(roles: &[Role]) -> Vec<BreakdownSlice> {
    roles
        .iter()
        .filter(|r| r.quantity > 0)
        .map(|r| BreakdownSlice {
            label: r.name.clone(),
            value: r.line_total(),
        })
        .collect()
}

/// Thousands-separated dollar amount, e.g. `$42,000`.
pub fn format_money(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::catalog::{preset_by_name, template_by_name};
    use crate::estimator::engine::Estimator;
    use crate::estimator::model::{RoleUpdate, Seniority};

    #[test]
    fn empty_team_costs_nothing() {
        let agg = compute_aggregates(&[], Duration::TwelveMonths);
        assert_eq!(agg, Aggregates::default());
        assert_eq!(agg.savings_rounded(), 0);
    }

    #[test]
    fn single_backend_engineer_for_six_months() {
        let mut est = Estimator::new();
        est.add_role(template_by_name("Backend Engineer").unwrap());

        let agg = compute_aggregates(est.roles(), Duration::SixMonths);
        assert_eq!(agg.monthly_cost, 800);
        assert_eq!(agg.total_cost, 4800);
        assert_eq!(agg.us_equivalent_monthly_cost, 7000);
        assert_eq!(agg.us_equivalent_total_cost, 42000);
        assert_eq!(agg.savings_rounded(), 89);
        assert_eq!(agg.absolute_savings(), 37200);
    }

    #[test]
    fn mvp_preset_monthly_cost() {
        let mut est = Estimator::new();
        est.apply_preset(preset_by_name("MVP Team").unwrap());
        assert_eq!(compute_aggregates(est.roles(), Duration::OneMonth).monthly_cost, 3100);
    }

    #[test]
    fn totals_scale_with_duration() {
        let mut est = Estimator::new();
        est.apply_preset(preset_by_name("Scale Team").unwrap());
        let id = est.add_custom_role("Analyst").unwrap();
        est.update_role(&id, RoleUpdate::monthly_rate(1111));

        for d in Duration::ALL {
            let agg = compute_aggregates(est.roles(), d);
            let m = d.months() as u64;
            assert_eq!(agg.total_cost, agg.monthly_cost * m);
            assert_eq!(agg.us_equivalent_total_cost, agg.us_equivalent_monthly_cost * m);
        }
    }

    #[test]
    fn us_equivalent_ignores_manual_rates() {
        let mut est = Estimator::new();
        let id = est.add_role(template_by_name("Security Engineer").unwrap());
        est.update_role(&id, RoleUpdate::monthly_rate(0));
        let agg = compute_aggregates(est.roles(), Duration::OneMonth);
        assert_eq!(agg.monthly_cost, 0);
        assert_eq!(agg.us_equivalent_monthly_cost, 12000);
        assert_eq!(agg.savings_rounded(), 100);
    }

    #[test]
    fn zero_headcount_means_zero_savings() {
        let mut est = Estimator::new();
        let id = est.add_role(template_by_name("Mobile Engineer").unwrap());
        est.update_role(&id, RoleUpdate::quantity(0));
        let agg = compute_aggregates(est.roles(), Duration::ThreeMonths);
        assert_eq!(agg.us_equivalent_total_cost, 0);
        assert_eq!(agg.savings_percent, 0.0);
    }

    #[test]
    fn overpriced_team_reports_negative_savings() {
        let mut est = Estimator::new();
        let id = est.add_role(template_by_name("Backend Engineer").unwrap());
        est.update_role(&id, RoleUpdate::monthly_rate(14000));
        let agg = compute_aggregates(est.roles(), Duration::OneMonth);
        assert_eq!(agg.savings_rounded(), -100);
        assert_eq!(agg.absolute_savings(), 0);
    }

    #[test]
    fn savings_halves_round_up() {
        let with = |savings_percent| Aggregates { savings_percent, ..Default::default() };
        assert_eq!(with(-0.5).savings_rounded(), 0);
        assert_eq!(with(-2.5).savings_rounded(), -2);
        assert_eq!(with(2.5).savings_rounded(), 3);
        assert_eq!(with(88.57).savings_rounded(), 89);
        assert_eq!(with(-88.57).savings_rounded(), -89);
    }

    #[test]
    fn breakdown_skips_unstaffed_roles() {
        let mut est = Estimator::new();
        let a = est.add_role(template_by_name("Backend Engineer").unwrap());
        let b = est.add_role(template_by_name("Product Manager").unwrap());
        est.update_role(&a, RoleUpdate::quantity(3));
        est.update_role(&b, RoleUpdate::quantity(0));
        est.update_role(&b, RoleUpdate::seniority(Seniority::Lead));

        let slices = build_cost_breakdown(est.roles());
        assert_eq!(
            slices,
            vec![BreakdownSlice { label: "Backend Engineer".to_string(), value: 2400 }]
        );
    }

    #[test]
    fn money_is_grouped_by_thousands() {
        assert_eq!(format_money(0), "$0");
        assert_eq!(format_money(800), "$800");
        assert_eq!(format_money(4800), "$4,800");
        assert_eq!(format_money(1234567), "$1,234,567");
    }
}

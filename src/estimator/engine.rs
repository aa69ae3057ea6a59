use log::debug;

use super::catalog::{Preset, RoleTemplate, LOCAL_RATES};
use super::model::{Role, RoleId, RoleUpdate, Seniority, MAX_QUANTITY};

/// The team being assembled on the pricing page.
///
/// Owns the role list in insertion order. Every mutation either applies fully
/// or leaves the list untouched; aggregates are derived on demand in
/// `estimator::aggregates` and never cached here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Estimator {
    roles: Vec<Role>,
    next_seq: u64,
}

impl Estimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn role(&self, id: &RoleId) -> Option<&Role> {
        self.roles.iter().find(|r| &r.id == id)
    }

    // Millisecond timestamp plus a per-session counter, so two additions in the
    // same tick still get distinct ids.
    fn fresh_id(&mut self, prefix: &str) -> RoleId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let millis = chrono::Utc::now().timestamp_millis();
        RoleId::new(format!("{}-{}-{}", slug(prefix), millis, seq))
    }

    fn new_role(&mut self, id_prefix: &str, name: &str, seniority: Seniority, quantity: u32) -> Role {
        Role {
            id: self.fresh_id(id_prefix),
            name: name.to_string(),
            seniority,
            quantity,
            monthly_rate: LOCAL_RATES.rate(seniority),
        }
    }

    pub fn add_role(&mut self, template: &RoleTemplate) -> RoleId {
        let role = self.new_role(template.name, template.name, template.default_seniority, 1);
        let id = role.id.clone();
        debug!("Added role {} ({})", role.name, id);
        self.roles.push(role);
        id
    }

    /// Adds a free-text role at Mid seniority. Blank names are ignored.
    pub fn add_custom_role(&mut self, name: &str) -> Option<RoleId> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            debug!("Ignoring custom role with blank name");
            return None;
        }
        let role = self.new_role("custom", trimmed, Seniority::Mid, 1);
        let id = role.id.clone();
        debug!("Added custom role {} ({})", role.name, id);
        self.roles.push(role);
        Some(id)
    }

    /// Applies a sparse update to one role. Returns false when the id is stale.
    ///
    /// A seniority change always reseeds the rate from the local table, even if
    /// the same update also carries a rate. Quantity is clamped to
    /// `0..=MAX_QUANTITY` on every path.
    pub fn update_role(&mut self, id: &RoleId, update: RoleUpdate) -> bool {
        let Some(role) = self.roles.iter_mut().find(|r| &r.id == id) else {
            debug!("Update for unknown role {}", id);
            return false;
        };

        if let Some(quantity) = update.quantity {
            role.quantity = quantity.min(MAX_QUANTITY);
        }
        if let Some(rate) = update.monthly_rate {
            role.monthly_rate = rate;
        }
        if let Some(seniority) = update.seniority {
            role.seniority = seniority;
            role.monthly_rate = LOCAL_RATES.rate(seniority);
        }
        debug!(
            "Updated role {}: {} x{} @ {}",
            id, role.seniority, role.quantity, role.monthly_rate
        );
        true
    }

    /// Stepper path: moves quantity by `delta`, staying within `0..=MAX_QUANTITY`.
    pub fn step_quantity(&mut self, id: &RoleId, delta: i32) -> bool {
        let Some(current) = self.role(id).map(|r| r.quantity) else {
            debug!("Step for unknown role {}", id);
            return false;
        };
        let next = (current as i64 + delta as i64).clamp(0, MAX_QUANTITY as i64) as u32;
        self.update_role(id, RoleUpdate::quantity(next))
    }

    pub fn remove_role(&mut self, id: &RoleId) -> bool {
        let before = self.roles.len();
        self.roles.retain(|r| &r.id != id);
        let removed = self.roles.len() != before;
        if removed {
            debug!("Removed role {}", id);
        } else {
            debug!("Remove for unknown role {}", id);
        }
        removed
    }

    /// Replaces the whole team with the preset's roles at table rates.
    pub fn apply_preset(&mut self, preset: &Preset) {
        let roles = preset
            .roles
            .iter()
            .map(|r| self.new_role(r.name, r.name, r.seniority, r.quantity))
            .collect::<Vec<_>>();
        debug!("Applied preset {} ({} roles)", preset.name, roles.len());
        self.roles = roles;
    }
}

fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::catalog::{preset_by_name, template_by_name, PRESETS, ROLE_TEMPLATES, US_RATES};
    use std::collections::HashSet;

    fn backend() -> &'static RoleTemplate {
        template_by_name("Backend Engineer").unwrap()
    }

    #[test]
    fn add_role_seeds_from_template() {
        let mut est = Estimator::new();
        let id = est.add_role(backend());
        let role = est.role(&id).unwrap();
        assert_eq!(role.name, "Backend Engineer");
        assert_eq!(role.seniority, Seniority::Mid);
        assert_eq!(role.quantity, 1);
        assert_eq!(role.monthly_rate, 800);
    }

    #[test]
    fn ids_are_unique_even_for_rapid_additions() {
        let mut est = Estimator::new();
        for _ in 0..50 {
            est.add_role(backend());
            est.add_custom_role("Ops");
        }
        let ids: HashSet<_> = est.roles().iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn roles_keep_insertion_order() {
        let mut est = Estimator::new();
        for t in ROLE_TEMPLATES.iter().take(4) {
            est.add_role(t);
        }
        let names: Vec<_> = est.roles().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            ["Backend Engineer", "Frontend Engineer", "Full-stack Engineer", "Mobile Engineer"]
        );
    }

    #[test]
    fn custom_role_with_blank_name_is_ignored() {
        let mut est = Estimator::new();
        assert!(est.add_custom_role("").is_none());
        assert!(est.add_custom_role("   \t").is_none());
        assert!(est.is_empty());
    }

    #[test]
    fn custom_role_defaults_to_mid() {
        let mut est = Estimator::new();
        let id = est.add_custom_role("  Blockchain Dev ").unwrap();
        let role = est.role(&id).unwrap();
        assert_eq!(role.name, "Blockchain Dev");
        assert_eq!(role.seniority, Seniority::Mid);
        assert_eq!(role.monthly_rate, LOCAL_RATES.mid);
        assert!(id.as_str().starts_with("custom-"));
    }

    #[test]
    fn seniority_change_resets_manual_rate() {
        let mut est = Estimator::new();
        let id = est.add_role(backend());
        assert!(est.update_role(&id, RoleUpdate::monthly_rate(1234)));
        assert_eq!(est.role(&id).unwrap().monthly_rate, 1234);

        est.update_role(&id, RoleUpdate::seniority(Seniority::Lead));
        assert_eq!(est.role(&id).unwrap().monthly_rate, 2500);
    }

    #[test]
    fn seniority_wins_over_rate_in_same_update() {
        let mut est = Estimator::new();
        let id = est.add_role(backend());
        est.update_role(
            &id,
            RoleUpdate {
                seniority: Some(Seniority::Junior),
                monthly_rate: Some(9999),
                quantity: None,
            },
        );
        assert_eq!(est.role(&id).unwrap().monthly_rate, 400);
    }

    #[test]
    fn manual_rate_survives_unrelated_updates() {
        let mut est = Estimator::new();
        let id = est.add_role(backend());
        est.update_role(&id, RoleUpdate::monthly_rate(950));
        est.update_role(&id, RoleUpdate::quantity(3));
        let role = est.role(&id).unwrap();
        assert_eq!(role.monthly_rate, 950);
        assert_eq!(role.quantity, 3);
    }

    #[test]
    fn update_clamps_quantity() {
        let mut est = Estimator::new();
        let id = est.add_role(backend());
        est.update_role(&id, RoleUpdate::quantity(500));
        assert_eq!(est.role(&id).unwrap().quantity, MAX_QUANTITY);
    }

    #[test]
    fn stepper_stays_in_bounds() {
        let mut est = Estimator::new();
        let id = est.add_role(backend());
        est.step_quantity(&id, -1);
        est.step_quantity(&id, -1);
        assert_eq!(est.role(&id).unwrap().quantity, 0);
        for _ in 0..30 {
            est.step_quantity(&id, 1);
        }
        assert_eq!(est.role(&id).unwrap().quantity, 20);
    }

    #[test]
    fn stale_ids_are_noops() {
        let mut est = Estimator::new();
        est.add_role(backend());
        let snapshot = est.clone();
        let ghost = RoleId::new("ghost".to_string());
        assert!(!est.update_role(&ghost, RoleUpdate::quantity(4)));
        assert!(!est.step_quantity(&ghost, 1));
        assert!(!est.remove_role(&ghost));
        assert_eq!(est, snapshot);
    }

    #[test]
    fn remove_drops_exactly_one_role() {
        let mut est = Estimator::new();
        let a = est.add_role(backend());
        let b = est.add_custom_role("Analyst").unwrap();
        let c = est.add_role(template_by_name("Security Engineer").unwrap());
        est.update_role(&c, RoleUpdate::monthly_rate(2000));
        let before_a = est.role(&a).cloned();
        let before_c = est.role(&c).cloned();

        assert!(est.remove_role(&b));
        assert_eq!(est.roles().len(), 2);
        assert_eq!(est.role(&a).cloned(), before_a);
        assert_eq!(est.role(&c).cloned(), before_c);
        assert!(est.role(&b).is_none());
    }

    #[test]
    fn preset_replaces_existing_team() {
        let mut est = Estimator::new();
        let old = est.add_role(backend());
        est.update_role(&old, RoleUpdate::monthly_rate(5));
        est.add_custom_role("Extra");

        for preset in PRESETS {
            est.apply_preset(preset);
            assert_eq!(est.roles().len(), preset.roles.len());
            assert!(est.role(&old).is_none());
            for (role, spec) in est.roles().iter().zip(preset.roles) {
                assert_eq!(role.name, spec.name);
                assert_eq!(role.quantity, spec.quantity);
                assert_eq!(role.monthly_rate, LOCAL_RATES.rate(spec.seniority));
            }
        }
    }

    #[test]
    fn preset_rates_never_use_us_table() {
        let mut est = Estimator::new();
        est.apply_preset(preset_by_name("MVP Team").unwrap());
        assert!(est
            .roles()
            .iter()
            .all(|r| r.monthly_rate != US_RATES.rate(r.seniority)));
    }

    struct Capture;

    static CAPTURED: std::sync::Mutex<Vec<String>> = std::sync::Mutex::new(Vec::new());

    impl log::Log for Capture {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            CAPTURED.lock().unwrap().push(record.args().to_string());
        }

        fn flush(&self) {}
    }

    #[test]
    fn successful_update_is_logged() {
        static LOGGER: Capture = Capture;
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Debug);

        let mut est = Estimator::new();
        let id = est.add_role(backend());
        assert!(est.update_role(&id, RoleUpdate::quantity(2)));

        let expected = format!("Updated role {}: Mid x2 @ 800", id);
        assert!(CAPTURED.lock().unwrap().iter().any(|line| line == &expected));
    }

    #[test]
    fn slug_collapses_punctuation() {
        assert_eq!(slug("Cloud Architect / DevOps"), "cloud-architect-devops");
        assert_eq!(slug("UI/UX Designer"), "ui-ux-designer");
    }
}

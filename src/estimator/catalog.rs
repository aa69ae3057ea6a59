use plotters::style::RGBColor;

use super::model::Seniority;

/// Base monthly rate per seniority for one staffing region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateTable {
    pub junior: u32,
    pub mid: u32,
    pub senior: u32,
    pub lead: u32,
}

impl RateTable {
    pub const fn rate(&self, seniority: Seniority) -> u32 {
        match seniority {
            Seniority::Junior => self.junior,
            Seniority::Mid => self.mid,
            Seniority::Senior => self.senior,
            Seniority::Lead => self.lead,
        }
    }
}

// Offshore (Bangladesh) team rates.
pub const LOCAL_RATES: RateTable = RateTable {
    junior: 400,
    mid: 800,
    senior: 1500,
    lead: 2500,
};

pub const US_RATES: RateTable = RateTable {
    junior: 3000,
    mid: 7000,
    senior: 12000,
    lead: 20000,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleTemplate {
    pub name: &'static str,
    pub default_seniority: Seniority,
}

pub const ROLE_TEMPLATES: &[RoleTemplate] = &[
    RoleTemplate { name: "Backend Engineer", default_seniority: Seniority::Mid },
    RoleTemplate { name: "Frontend Engineer", default_seniority: Seniority::Mid },
    RoleTemplate { name: "Full-stack Engineer", default_seniority: Seniority::Senior },
    RoleTemplate { name: "Mobile Engineer", default_seniority: Seniority::Mid },
    RoleTemplate { name: "Cloud Architect / DevOps", default_seniority: Seniority::Senior },
    RoleTemplate { name: "QA / Automation Engineer", default_seniority: Seniority::Mid },
    RoleTemplate { name: "UI/UX Designer", default_seniority: Seniority::Mid },
    RoleTemplate { name: "Product Manager", default_seniority: Seniority::Senior },
    RoleTemplate { name: "Data Scientist / ML Engineer", default_seniority: Seniority::Senior },
    RoleTemplate { name: "AI Engineer / LLM Specialist", default_seniority: Seniority::Senior },
    RoleTemplate { name: "Security Engineer", default_seniority: Seniority::Senior },
    RoleTemplate { name: "Technical Writer / Docs", default_seniority: Seniority::Mid },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresetRole {
    pub name: &'static str,
    pub seniority: Seniority,
    pub quantity: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub roles: &'static [PresetRole],
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "MVP Team",
        roles: &[
            PresetRole { name: "Backend Engineer", seniority: Seniority::Senior, quantity: 1 },
            PresetRole { name: "Frontend Engineer", seniority: Seniority::Mid, quantity: 1 },
            PresetRole { name: "UI/UX Designer", seniority: Seniority::Mid, quantity: 1 },
        ],
    },
    Preset {
        name: "Scale Team",
        roles: &[
            PresetRole { name: "Backend Engineer", seniority: Seniority::Senior, quantity: 2 },
            PresetRole { name: "Frontend Engineer", seniority: Seniority::Mid, quantity: 2 },
            PresetRole { name: "Cloud Architect / DevOps", seniority: Seniority::Senior, quantity: 1 },
            PresetRole { name: "QA / Automation Engineer", seniority: Seniority::Mid, quantity: 1 },
            PresetRole { name: "Product Manager", seniority: Seniority::Senior, quantity: 1 },
        ],
    },
];

pub const CHART_COLORS: [RGBColor; 8] = [
    RGBColor(0xFF, 0x80, 0x00),
    RGBColor(0x37, 0x32, 0x2F),
    RGBColor(0x6B, 0x72, 0x80),
    RGBColor(0x9C, 0xA3, 0xAF),
    RGBColor(0xD1, 0xD5, 0xDB),
    RGBColor(0xE5, 0xE7, 0xEB),
    RGBColor(0xF3, 0xF4, 0xF6),
    RGBColor(0xF9, 0xFA, 0xFB),
];

pub fn chart_color(index: usize) -> RGBColor {
    CHART_COLORS[index % CHART_COLORS.len()]
}

pub fn preset_by_name(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}

pub fn template_by_name(name: &str) -> Option<&'static RoleTemplate> {
    ROLE_TEMPLATES.iter().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_rates_undercut_us_rates_at_every_level() {
        for s in Seniority::ALL {
            assert!(LOCAL_RATES.rate(s) < US_RATES.rate(s), "{s}");
        }
        assert_eq!(LOCAL_RATES.rate(Seniority::Mid), 800);
        assert_eq!(US_RATES.rate(Seniority::Mid), 7000);
    }

    #[test]
    fn presets_only_reference_known_templates() {
        for preset in PRESETS {
            for role in preset.roles {
                assert!(template_by_name(role.name).is_some(), "{}", role.name);
            }
        }
        assert_eq!(preset_by_name("Scale Team").map(|p| p.roles.len()), Some(5));
    }

    #[test]
    fn chart_colors_cycle() {
        assert_eq!(chart_color(0), chart_color(8));
        assert_ne!(chart_color(0), chart_color(1));
    }
}

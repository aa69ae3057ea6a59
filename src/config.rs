use log::Level;

pub const BRAND_NAME: &str = "CodeMyPixel";

pub const BOOKING_LINK: &str = "sabbir-ahmed-f0ojt1/30min";
pub const BOOKING_NAMESPACE: &str = "30min";

pub const CONTACT_EMAIL: &str = "Admin@codemypixel.com";
pub const OFFICE_ADDRESS: &str = "1421 Narayanganj, Bangladesh";
pub const WHATSAPP_DISPLAY: &str = "+880 1406 575730";
pub const WHATSAPP_NUMBER: &str = "8801406575730";

pub const FACEBOOK_URL: &str = "https://www.facebook.com/codemypixelai";
pub const YOUTUBE_URL: &str = "https://www.youtube.com/channel/UCvtwb2wkN7ctLFjHdSfwW_A";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/company/codemypixeldotcom";

pub const ESTIMATE_FILE_NAME: &str = "team-estimate.csv";
// How long the exported blob URL stays valid after the download is triggered.
pub const EXPORT_URL_REVOKE_DELAY_MS: u32 = 40_000;

// Testimonial carousel timings, in milliseconds.
pub const TESTIMONIAL_ROTATE_MS: u32 = 12_000;
pub const TESTIMONIAL_FADE_OUT_MS: u32 = 300;
pub const TESTIMONIAL_FADE_IN_MS: u32 = 100;

pub fn booking_url() -> String {
    format!("https://cal.com/{}", BOOKING_LINK)
}

/// Inline calendar for the `/book` page, month view in the light theme.
pub fn booking_embed_url() -> String {
    format!(
        "{}?embed=true&layout={}&theme={}",
        booking_url(),
        urlencoding::encode("month_view"),
        urlencoding::encode("light")
    )
}

pub fn contact_mailto(subject: &str) -> String {
    format!("mailto:{}?subject={}", CONTACT_EMAIL, urlencoding::encode(subject))
}

pub fn whatsapp_url() -> String {
    format!("https://wa.me/{}", WHATSAPP_NUMBER)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_links_point_at_the_same_event() {
        assert_eq!(booking_url(), "https://cal.com/sabbir-ahmed-f0ojt1/30min");
        assert!(booking_embed_url().starts_with(&booking_url()));
        assert!(booking_embed_url().ends_with("layout=month_view&theme=light"));
    }

    #[test]
    fn mailto_subject_is_encoded() {
        assert_eq!(
            contact_mailto("Case studies & references"),
            "mailto:Admin@codemypixel.com?subject=Case%20studies%20%26%20references"
        );
    }
}

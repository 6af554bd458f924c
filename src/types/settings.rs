//! The singleton school settings record

use super::patch::{double_option, merge};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

/// School profile and receipt presentation options
///
/// Exactly one instance lives in a store. It is read whole and updated by
/// shallow merge through [`SettingsPatch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchoolSettings {
    pub school_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub principal_name: String,
    pub logo: Option<String>,
    /// Prefix printed before receipt numbers
    pub receipt_prefix: String,
    pub academic_year: String,
    pub current_term: String,
    pub enable_email_notifications: bool,
    pub enable_sms_notifications: bool,
    pub enable_automatic_reminders: bool,
    /// Days before a due date that reminders go out
    pub reminder_days: u32,
    pub tax_percentage: Decimal,
    pub receipt_footer_text: String,
    pub receipt_copies: u32,
    pub theme: Theme,
}

impl Default for SchoolSettings {
    fn default() -> Self {
        Self {
            school_name: "School".to_string(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            website: String::new(),
            principal_name: String::new(),
            logo: None,
            receipt_prefix: "REC".to_string(),
            academic_year: "2025-2026".to_string(),
            current_term: "Quarter 1".to_string(),
            enable_email_notifications: false,
            enable_sms_notifications: false,
            enable_automatic_reminders: false,
            reminder_days: 5,
            tax_percentage: Decimal::ZERO,
            receipt_footer_text:
                "Thank you for your payment. This receipt is system generated.".to_string(),
            receipt_copies: 2,
            theme: Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SettingsPatch {
    #[serde(default)]
    pub school_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub principal_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub logo: Option<Option<String>>,
    #[serde(default)]
    pub receipt_prefix: Option<String>,
    #[serde(default)]
    pub academic_year: Option<String>,
    #[serde(default)]
    pub current_term: Option<String>,
    #[serde(default)]
    pub enable_email_notifications: Option<bool>,
    #[serde(default)]
    pub enable_sms_notifications: Option<bool>,
    #[serde(default)]
    pub enable_automatic_reminders: Option<bool>,
    #[serde(default)]
    pub reminder_days: Option<u32>,
    #[serde(default)]
    pub tax_percentage: Option<Decimal>,
    #[serde(default)]
    pub receipt_footer_text: Option<String>,
    #[serde(default)]
    pub receipt_copies: Option<u32>,
    #[serde(default)]
    pub theme: Option<Theme>,
}

impl SettingsPatch {
    pub fn apply(self, settings: &mut SchoolSettings) {
        merge(&mut settings.school_name, self.school_name);
        merge(&mut settings.address, self.address);
        merge(&mut settings.phone, self.phone);
        merge(&mut settings.email, self.email);
        merge(&mut settings.website, self.website);
        merge(&mut settings.principal_name, self.principal_name);
        merge(&mut settings.logo, self.logo);
        merge(&mut settings.receipt_prefix, self.receipt_prefix);
        merge(&mut settings.academic_year, self.academic_year);
        merge(&mut settings.current_term, self.current_term);
        merge(
            &mut settings.enable_email_notifications,
            self.enable_email_notifications,
        );
        merge(
            &mut settings.enable_sms_notifications,
            self.enable_sms_notifications,
        );
        merge(
            &mut settings.enable_automatic_reminders,
            self.enable_automatic_reminders,
        );
        merge(&mut settings.reminder_days, self.reminder_days);
        merge(&mut settings.tax_percentage, self.tax_percentage);
        merge(&mut settings.receipt_footer_text, self.receipt_footer_text);
        merge(&mut settings.receipt_copies, self.receipt_copies);
        merge(&mut settings.theme, self.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_merges_only_provided_fields() {
        let mut settings = SchoolSettings::default();
        let patch = SettingsPatch {
            school_name: Some("Hillside Public School".to_string()),
            reminder_days: Some(7),
            theme: Some(Theme::Dark),
            ..Default::default()
        };

        patch.apply(&mut settings);

        assert_eq!(settings.school_name, "Hillside Public School");
        assert_eq!(settings.reminder_days, 7);
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.receipt_copies, 2);
        assert_eq!(settings.receipt_prefix, "REC");
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::System).unwrap(), r#""system""#);
    }
}

use crate::domain::money::Money;
use std::fmt;

/// Values interpolated into a reminder.
#[derive(Debug, Clone, Copy)]
pub struct ReminderDetails<'a> {
    pub customer_name: &'a str,
    pub loan_number: &'a str,
    pub advance: Money,
    pub edi: Money,
    pub overdue: Money,
    pub payable: Money,
}

/// A fully rendered Telugu payment reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderMessage(String);

impl ReminderMessage {
    /// Renders the reminder template.
    ///
    /// The payment link is `payment_link_base` immediately followed by the
    /// loan number; no separator is inserted, so the base should end in `/`.
    pub fn compose(details: &ReminderDetails<'_>, payment_link_base: &str) -> Self {
        let ReminderDetails {
            customer_name,
            loan_number,
            advance,
            edi,
            overdue,
            payable,
        } = details;

        Self(format!(
            "👋 ప్రియమైన {customer_name} గారు,\n\
             Veritas Finance Limited నుండి మేము మాట్లాడుతున్నాం.\n\n\
             💳 లోన్ నంబర్: {loan_number}\n\
             💰 అడ్వాన్స్‌ మొత్తం = ₹{advance}\n\
             📌 ఈడీ మొత్తం = ₹{edi}\n\
             🔴 ఓవర్‌డ్యూ = ₹{overdue}\n\
             ✅ చెల్లించవలసిన మొత్తం = ₹{payable}\n\n\
             దయచేసి వెంటనే చెల్లించండి.\n\
             🔗 చెల్లించడానికి లింక్: {payment_link_base}{loan_number}"
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReminderMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn details<'a>(name: &'a str, loan: &'a str) -> ReminderDetails<'a> {
        ReminderDetails {
            customer_name: name,
            loan_number: loan,
            advance: Money::new(dec!(100)),
            edi: Money::new(dec!(500)),
            overdue: Money::new(dec!(200)),
            payable: Money::new(dec!(600)),
        }
    }

    #[test]
    fn test_payment_link_is_plain_concatenation() {
        let message = ReminderMessage::compose(&details("Ravi", "L123"), "https://x/pay/");
        assert!(message.as_str().ends_with("https://x/pay/L123"));

        let no_slash = ReminderMessage::compose(&details("Ravi", "L123"), "https://x/pay");
        assert!(no_slash.as_str().ends_with("https://x/payL123"));
    }

    #[test]
    fn test_template_layout() {
        let message = ReminderMessage::compose(&details("Ravi", "L123"), "https://x/pay/");
        let lines: Vec<&str> = message.as_str().lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "👋 ప్రియమైన Ravi గారు,");
        assert_eq!(lines[1], "Veritas Finance Limited నుండి మేము మాట్లాడుతున్నాం.");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "💳 లోన్ నంబర్: L123");
        assert_eq!(lines[4], "💰 అడ్వాన్స్‌ మొత్తం = ₹100.00");
        assert_eq!(lines[5], "📌 ఈడీ మొత్తం = ₹500.00");
        assert_eq!(lines[6], "🔴 ఓవర్‌డ్యూ = ₹200.00");
        assert_eq!(lines[7], "✅ చెల్లించవలసిన మొత్తం = ₹600.00");
        assert_eq!(lines[8], "");
        assert_eq!(lines[9], "దయచేసి వెంటనే చెల్లించండి.");
    }

    #[test]
    fn test_compose_is_deterministic() {
        let a = ReminderMessage::compose(&details("Customer", "L9"), "https://x/");
        let b = ReminderMessage::compose(&details("Customer", "L9"), "https://x/");
        assert_eq!(a, b);
    }
}

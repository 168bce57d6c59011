/// All localized strings shown by the message form for one language
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Section Copy ====================
    /// Section heading above the form
    pub write_us_message: &'static str,

    /// Short invitation below the heading
    pub write_us_description: &'static str,

    // ==================== Field Placeholders ====================
    /// Placeholder for the message body
    pub write_your_message: &'static str,

    /// Placeholder and label for the sender name
    pub your_name: &'static str,

    // ==================== Buttons ====================
    /// Button that empties the message body
    pub clear_drawing: &'static str,

    /// Submit button label
    pub send_message: &'static str,

    // ==================== Status Banner ====================
    /// Shown while a submission is in flight (also the busy submit label)
    pub sending_message: &'static str,

    /// Shown after the endpoint confirms delivery
    pub message_sent: &'static str,

    /// Shown when input is missing, and as the fallback for failures without text
    pub message_error: &'static str,
}

impl LanguageStrings {
    /// Resolve a page key (as used in the markup, e.g. `"messageSent"`).
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        let value = match key {
            "writeUsMessage" => self.write_us_message,
            "writeUsDescription" => self.write_us_description,
            "writeYourMessage" => self.write_your_message,
            "yourName" => self.your_name,
            "clearDrawing" => self.clear_drawing,
            "sendMessage" => self.send_message,
            "sendingMessage" => self.sending_message,
            "messageSent" => self.message_sent,
            "messageError" => self.message_error,
            _ => return None,
        };
        Some(value)
    }
}

/// Every key `lookup` understands
pub const KEYS: [&str; 9] = [
    "writeUsMessage",
    "writeUsDescription",
    "writeYourMessage",
    "yourName",
    "clearDrawing",
    "sendMessage",
    "sendingMessage",
    "messageSent",
    "messageError",
];

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    write_us_message: "Write Us a Message",
    write_us_description: "Share your wishes with us on this special day",
    write_your_message: "Write your message here...",
    your_name: "Your Name",
    clear_drawing: "Clear",
    send_message: "Send Message",
    sending_message: "Sending...",
    message_sent: "Thank you! Your message has been sent.",
    message_error: "Please enter your name and a message.",
};

// ==================== Arabic Strings ====================

pub const ARABIC_STRINGS: LanguageStrings = LanguageStrings {
    write_us_message: "اكتب لنا رسالة",
    write_us_description: "شاركنا أمنياتك في هذا اليوم المميز",
    write_your_message: "اكتب رسالتك هنا...",
    your_name: "اسمك",
    clear_drawing: "مسح",
    send_message: "إرسال الرسالة",
    sending_message: "جارٍ الإرسال...",
    message_sent: "شكراً لك! تم إرسال رسالتك.",
    message_error: "من فضلك أدخل اسمك ورسالتك.",
};

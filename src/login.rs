//! The two-stage OTP login flow
//!
//! Stage one collects an email and asks the server to mail a one-time password;
//! stage two collects the 4-digit code and trades it for a bearer token. The network
//! calls themselves live on the [`Client`](crate::client::Client)
//! ([`send_otp`](crate::client::Client::send_otp) /
//! [`verify_otp`](crate::client::Client::verify_otp)); this state machine only tracks
//! what the login surface should show.

/// How many digits the emailed code has
pub const OTP_LEN: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginStage {
    EnterEmail,
    EnterOtp,
}

#[derive(Clone, Debug)]
pub struct LoginFlow {
    stage: LoginStage,
    email: String,
    otp: String,
    error: Option<String>,
    busy: bool,
}

impl Default for LoginFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginFlow {
    pub fn new() -> Self {
        Self {
            stage: LoginStage::EnterEmail,
            email: String::new(),
            otp: String::new(),
            error: None,
            busy: false,
        }
    }

    pub fn stage(&self) -> LoginStage { self.stage }
    pub fn email(&self) -> &str { &self.email }
    pub fn otp(&self) -> &str { &self.otp }
    pub fn error(&self) -> Option<&str> { self.error.as_deref() }
    pub fn is_busy(&self) -> bool { self.busy }

    pub fn set_email(&mut self, email: &str) {
        if !self.busy {
            self.email = email.to_string();
        }
    }

    /// Record what the user typed in the OTP box.
    /// Only all-digit values of at most [`OTP_LEN`] characters are accepted;
    /// anything else leaves the field unchanged
    pub fn input_otp(&mut self, value: &str) {
        if value.chars().count() <= OTP_LEN && value.chars().all(|c| c.is_ascii_digit()) {
            self.otp = value.to_string();
        }
    }

    /// Ask to send the OTP. Returns the email to post, or `None` if the flow is not
    /// ready (wrong stage, already busy, blank email)
    pub fn submit_email(&mut self) -> Option<String> {
        if self.stage != LoginStage::EnterEmail || self.busy || self.email.trim().is_empty() {
            return None;
        }
        self.busy = true;
        self.error = None;
        Some(self.email.clone())
    }

    /// The OTP email went out; move to the code-entry stage
    pub fn otp_sent(&mut self) {
        self.busy = false;
        self.otp.clear();
        self.stage = LoginStage::EnterOtp;
    }

    /// Ask to verify the entered code. Returns `(email, otp)` to post, or `None`
    pub fn submit_otp(&mut self) -> Option<(String, String)> {
        if self.stage != LoginStage::EnterOtp || self.busy || self.otp.is_empty() {
            return None;
        }
        self.busy = true;
        self.error = None;
        Some((self.email.clone(), self.otp.clone()))
    }

    /// Verification succeeded (the token is already stored by the client)
    pub fn logged_in(&mut self) {
        self.busy = false;
        self.error = None;
    }

    /// The pending request failed; stay on the current stage with an inline message
    pub fn failed(&mut self, message: &str) {
        self.busy = false;
        self.error = Some(message.to_string());
    }

    /// "Back to email" on the OTP screen
    pub fn back_to_email(&mut self) {
        if !self.busy {
            self.stage = LoginStage::EnterEmail;
            self.otp.clear();
        }
    }
}

//! Contact section: static details column plus the message form.

use super::escape;
use crate::services::contact::{ContactForm, ContactState};

/// Disables the submit button while the browser awaits the response, so
/// only one submission is in flight per page. A page restored from the
/// back-forward cache gets its button back.
const PENDING_SCRIPT: &str = r#"<script>
(function () {
  var form = document.getElementById("contact-form");
  var button = form.querySelector("button[type=submit]");
  form.addEventListener("submit", function (event) {
    if (button.disabled) { event.preventDefault(); return; }
    button.disabled = true;
    button.textContent = "Sending...";
  });
  window.addEventListener("pageshow", function () {
    button.disabled = false;
    button.textContent = "Send Message";
  });
})();
</script>"#;

const DETAILS: &str = r#"<div class="contact-details">
    <h3>Get In Touch</h3>
    <div><h4>Email</h4><p>contact@example.com</p></div>
    <div><h4>Location</h4><p>123 Innovation Way</p><p>San Francisco, CA 94103</p></div>
    <div><h4>Phone</h4><p>(555) 123-4567</p></div>
    <div class="office-hours"><h3>Office Hours</h3><p>Monday - Friday: 9am - 5pm</p><p>Saturday &amp; Sunday: Closed</p></div>
  </div>"#;

/// Render the contact section. Field values are echoed back after a failed
/// submission and cleared after a successful one.
#[must_use]
pub fn contact_section(form: &ContactForm, state: &ContactState) -> String {
    let (status, keep_values) = match state {
        ContactState::Idle => (String::new(), false),
        ContactState::Failed(message) => (
            format!(r#"<span class="form-error" role="alert">{}</span>"#, escape(message)),
            true,
        ),
        ContactState::Sent { message, .. } => (
            format!(r#"<span class="form-success" role="status">{}</span>"#, escape(message)),
            false,
        ),
    };
    let value = |v: &str| if keep_values { escape(v) } else { String::new() };

    format!(
        r#"<section class="contact" id="contact">
  <h2>Contact Us</h2>
  {DETAILS}
  <div class="contact-form-column">
    <h3>Send Us a Message</h3>
    <form id="contact-form" method="post" action="/contact#contact">
      <label for="name">Name</label>
      <input type="text" id="name" name="name" required placeholder="Your Name" value="{}">
      <label for="email">Email</label>
      <input type="email" id="email" name="email" required placeholder="your@email.com" value="{}">
      <label for="message">Message</label>
      <textarea id="message" name="message" required placeholder="How can we help?" rows="6">{}</textarea>
      <button type="submit">Send Message</button>
      <div class="form-status">{status}</div>
    </form>
  </div>
</section>
{PENDING_SCRIPT}"#,
        value(&form.name),
        value(&form.email),
        value(&form.message),
    )
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;

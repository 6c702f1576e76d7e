#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

/// Trimmed values of the three contact form fields.
#[derive(Clone, Debug, Default)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Inline status shown next to the form, with its display color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormStatus {
    MissingFields,
    InvalidEmail,
    Sent,
    /// Server-reported errors, already joined for display.
    ServerErrors(String),
    SendFailed,
    ConnectionFailed,
}

impl FormStatus {
    pub fn message(&self) -> &str {
        match self {
            FormStatus::MissingFields => "Please fill in all fields.",
            FormStatus::InvalidEmail => "Please enter a valid email address.",
            FormStatus::Sent => "Message sent. We'll get back to you soon!",
            FormStatus::ServerErrors(joined) => joined,
            FormStatus::SendFailed => "Sending failed. Please try again later.",
            FormStatus::ConnectionFailed => "Connection error. Please try again later.",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            FormStatus::MissingFields | FormStatus::InvalidEmail => "orange",
            FormStatus::Sent => "limegreen",
            FormStatus::ServerErrors(_) | FormStatus::SendFailed | FormStatus::ConnectionFailed => {
                "red"
            }
        }
    }
}

/// Check the fields before any network request is issued. Validation
/// failures are user-correctable and abort the submission.
pub fn validate(fields: &FormFields) -> Result<(), FormStatus> {
    if fields.name.is_empty() || fields.email.is_empty() || fields.message.is_empty() {
        return Err(FormStatus::MissingFields);
    }
    if !is_valid_email(&fields.email) {
        return Err(FormStatus::InvalidEmail);
    }
    Ok(())
}

/// Loose `local@domain.tld` shape: no whitespace, exactly one `@`, and a
/// dot in the domain with non-empty parts on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    matches!(domain.split_once('.'), Some((host, tld)) if !host.is_empty() && !tld.is_empty())
}

#[derive(Debug, serde::Deserialize)]
struct RejectionBody {
    #[serde(default)]
    errors: Vec<ServerError>,
}

#[derive(Debug, serde::Deserialize)]
struct ServerError {
    message: String,
}

/// Fold a non-2xx response body into a status: server-supplied error
/// messages joined with commas when present, a generic retry text otherwise.
pub fn rejection_status(body: &str) -> FormStatus {
    let messages: Vec<String> = serde_json::from_str::<RejectionBody>(body)
        .map(|b| b.errors.into_iter().map(|e| e.message).collect())
        .unwrap_or_default();

    if messages.is_empty() {
        FormStatus::SendFailed
    } else {
        FormStatus::ServerErrors(messages.join(", "))
    }
}

/// Wire the contact form's submit handler. Missing form or status elements
/// leave the page's native form behavior in place.
#[cfg(feature = "hydrate")]
pub fn wire(document: &web_sys::Document) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(form) = document
        .get_element_by_id("contactForm")
        .and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok())
    else {
        return;
    };
    let Some(status) = document
        .get_element_by_id("formStatus")
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };

    let target = form.clone();
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        ev.prevent_default();
        on_submit(&target, &status);
    });
    let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[cfg(feature = "hydrate")]
fn on_submit(form: &web_sys::HtmlFormElement, status: &web_sys::HtmlElement) {
    let fields = read_fields(form);
    if let Err(invalid) = validate(&fields) {
        show_status(status, &invalid);
        return;
    }

    let Ok(data) = web_sys::FormData::new_with_form(form) else {
        show_status(status, &FormStatus::ConnectionFailed);
        return;
    };
    let action = form.action();
    let form = form.clone();
    let status = status.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = crate::net::api::post_contact_form(&action, data).await;
        if outcome == FormStatus::Sent {
            form.reset();
        }
        show_status(&status, &outcome);
    });
}

#[cfg(feature = "hydrate")]
fn read_fields(form: &web_sys::HtmlFormElement) -> FormFields {
    use wasm_bindgen::JsCast;

    let value = |id: &str| -> String {
        let Ok(Some(el)) = form.query_selector(&format!("#{id}")) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
            input.value().trim().to_owned()
        } else if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
            area.value().trim().to_owned()
        } else {
            String::new()
        }
    };

    FormFields { name: value("name"), email: value("email"), message: value("message") }
}

#[cfg(feature = "hydrate")]
fn show_status(status: &web_sys::HtmlElement, outcome: &FormStatus) {
    status.set_text_content(Some(outcome.message()));
    let _ = status.style().set_property("color", outcome.color());
}

#![forbid(unsafe_code)]

//! Contact form and direct channels.

use folio_runtime::Frame;

use super::{Section, ViewContext, open_section, section_header};
use crate::contact::{ContactForm, Field, FormStatus};

fn field_keys(field: Field) -> (&'static str, &'static str) {
    match field {
        Field::Name => ("contact.name", "contact.namePlaceholder"),
        Field::Email => ("contact.email", "contact.emailPlaceholder"),
        Field::Message => ("contact.message", "contact.messagePlaceholder"),
    }
}

pub fn view(frame: &mut Frame, ctx: &ViewContext<'_>, form: &ContactForm) {
    let t = ctx.t;
    open_section(frame, ctx, Section::Contact);
    section_header(frame, &t.t("contact.title"), &t.t("contact.subtitle"));

    let busy = form.is_submitting();
    frame.open(
        "form",
        &[
            ("class", "contact-form"),
            ("novalidate", ""),
            ("data-action", "submit-contact"),
            ("aria-busy", if busy { "true" } else { "false" }),
        ],
    );
    for field in Field::ALL {
        input(frame, ctx, form, field, busy);
    }

    let (label_key, disabled) = if busy {
        ("contact.sending", true)
    } else {
        ("contact.send", false)
    };
    let mut attrs = vec![("type", "submit"), ("class", "button button-primary")];
    if disabled {
        attrs.push(("disabled", ""));
    }
    frame.element("button", &attrs, &t.t(label_key));

    match form.status() {
        FormStatus::Success => {
            frame.element(
                "p",
                &[("class", "form-status success"), ("role", "status")],
                &t.t("contact.success"),
            );
        }
        FormStatus::Failed(err) => {
            frame.with("div", &[("class", "form-status error"), ("role", "alert")], |f| {
                f.element("p", &[], &t.t("contact.failed"));
                f.element("p", &[("class", "form-status-detail")], &t.t(err.message_key()));
                f.element(
                    "button",
                    &[("type", "button"), ("data-action", "retry-contact")],
                    &t.t("contact.retry"),
                );
            });
        }
        FormStatus::Idle | FormStatus::Editing | FormStatus::Submitting => {}
    }
    frame.close("form");

    channels(frame, ctx);
    frame.close("section");
}

fn input(frame: &mut Frame, ctx: &ViewContext<'_>, form: &ContactForm, field: Field, busy: bool) {
    let t = ctx.t;
    let (label_key, placeholder_key) = field_keys(field);
    let id = format!("contact-{}", field.id());
    let error_id = format!("{id}-error");
    let placeholder = t.t(placeholder_key);
    let value = form.fields().get(field);
    let error = form.error(field);

    frame.with("div", &[("class", "form-field")], |f| {
        f.element("label", &[("for", id.as_str())], &t.t(label_key));
        let mut attrs = vec![
            ("id", id.as_str()),
            ("name", field.id()),
            ("placeholder", &*placeholder),
            ("data-field", field.id()),
        ];
        if error.is_some() {
            attrs.push(("aria-invalid", "true"));
            attrs.push(("aria-describedby", error_id.as_str()));
        }
        if busy {
            attrs.push(("disabled", ""));
        }
        match field {
            Field::Message => {
                attrs.push(("rows", "5"));
                f.element("textarea", &attrs, value);
            }
            Field::Email => {
                attrs.push(("type", "email"));
                attrs.push(("value", value));
                f.void("input", &attrs);
            }
            Field::Name => {
                attrs.push(("type", "text"));
                attrs.push(("value", value));
                f.void("input", &attrs);
            }
        }
        if let Some(error) = error {
            f.element(
                "p",
                &[("id", error_id.as_str()), ("class", "field-error")],
                &t.t(error.message_key()),
            );
        }
    });
}

fn channels(frame: &mut Frame, ctx: &ViewContext<'_>) {
    let t = ctx.t;
    let profile = ctx.profile;
    let whatsapp = profile.whatsapp_url();
    let mailto = profile.mailto_url();
    let tel = profile.tel_url();
    let rows = [
        ("contact.whatsapp", whatsapp.as_str(), profile.phone.as_str(), true),
        ("contact.email", mailto.as_str(), profile.email.as_str(), false),
        ("contact.phone", tel.as_str(), profile.phone.as_str(), false),
        (
            "contact.portfolio",
            profile.portfolio_url.as_str(),
            profile.portfolio_url.as_str(),
            true,
        ),
    ];
    frame.with("div", &[("class", "contact-channels")], |f| {
        f.element("p", &[], &t.t("contact.orText"));
        f.open("ul", &[]);
        for (key, href, shown, external) in rows {
            f.with("li", &[("class", "channel")], |f| {
                f.element("span", &[("class", "channel-label")], &t.t(key));
                if external {
                    f.element(
                        "a",
                        &[
                            ("href", href),
                            ("target", "_blank"),
                            ("rel", "noopener noreferrer"),
                        ],
                        shown,
                    );
                } else {
                    f.element("a", &[("href", href)], shown);
                }
            });
        }
        f.close("ul");
    });
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::contact::{ContactMsg, DeliveryError, SimulatedTransport};
    use crate::reveal::RevealTracker;
    use crate::sections::test_support::{config, translator};
    use folio_i18n::Locale;

    fn render(form: &ContactForm, locale: Locale) -> String {
        let t = translator(locale);
        let profile = config().profile;
        let reveal = RevealTracker::new();
        let mut frame = Frame::new();
        view(
            &mut frame,
            &ViewContext {
                t: &t,
                profile: &profile,
                reveal: &reveal,
            },
            form,
        );
        frame.into_string()
    }

    fn form() -> ContactForm {
        ContactForm::new(
            config().contact,
            Rc::new(SimulatedTransport::new(Duration::from_millis(1000))),
        )
    }

    #[test]
    fn field_errors_are_rendered() {
        let mut form = form();
        form.update(ContactMsg::Submit);
        let html = render(&form, Locale::PtBr);
        assert_eq!(html.matches("Este campo é obrigatório.").count(), 3);
        assert!(html.contains("aria-invalid=\"true\""));
    }

    #[test]
    fn submitting_disables_inputs() {
        let mut form = form();
        form.update(ContactMsg::Edit(Field::Name, "Ana".into()));
        form.update(ContactMsg::Edit(Field::Email, "ana@example.com".into()));
        form.update(ContactMsg::Edit(Field::Message, "<hi>".into()));
        form.update(ContactMsg::Submit);
        let html = render(&form, Locale::En);
        assert!(html.contains("Sending..."));
        assert!(html.contains("aria-busy=\"true\""));
        assert!(html.contains("&lt;hi&gt;</textarea>"));
    }

    #[test]
    fn failure_offers_retry() {
        let mut form = form();
        form.update(ContactMsg::Edit(Field::Name, "Ana".into()));
        form.update(ContactMsg::Edit(Field::Email, "ana@example.com".into()));
        form.update(ContactMsg::Edit(Field::Message, "hi".into()));
        form.update(ContactMsg::Submit);
        let attempt = form.current_attempt().unwrap();
        form.update(ContactMsg::Outcome {
            attempt,
            result: Err(DeliveryError::Rejected { status: 400 }),
        });
        let html = render(&form, Locale::En);
        assert!(html.contains("data-action=\"retry-contact\""));
        assert!(html.contains("The server rejected the message."));
    }

    #[test]
    fn direct_channels_listed() {
        let html = render(&form(), Locale::En);
        assert!(html.contains("Or reach me directly via:"));
        assert!(html.contains("tel:+5511999999999"));
        assert!(html.contains("WhatsApp"));
    }
}

//! Profile page: role picker plus login / registration forms.
//!
//! Отправка имитируется: через `form_submit_ms` форма валидируется, при
//! ошибке введённые данные остаются на месте.

use crate::layout::global_context::use_app;
use crate::layout::top_header::TopHeader;
use crate::shared::icons::icon;
use crate::shared::timers::use_action_runner;
use crate::shared::toast::use_toasts;
use contracts::enums::Role;
use contracts::shared::async_action::{ActionKind, WidgetId};
use contracts::shared::forms::{
    failure_toast, login_success_toast, registration_success_toast, LoginForm, RegistrationForm,
};
use contracts::shared::notification::Notifier;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Checkbox, Input, InputType};

const SUBMIT_WIDGET: &str = "profileSubmit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormMode {
    Login,
    Register,
}

impl FormMode {
    fn from_query(mode: Option<&str>) -> Self {
        match mode {
            Some("login") => FormMode::Login,
            _ => FormMode::Register,
        }
    }
}

fn role_icon(role: Role) -> &'static str {
    match role {
        Role::Manufacturer => "box",
        Role::Distributor => "truck",
        Role::Wholesaler => "shopping-cart",
        Role::Retailer => "package",
    }
}

fn name_label(role: Role) -> String {
    match role {
        Role::Manufacturer => "Company Name*".to_string(),
        other => format!("{} Name*", other.display_name()),
    }
}

#[component]
fn Field(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] password: bool,
) -> impl IntoView {
    let input_type = if password { InputType::Password } else { InputType::Text };
    view! {
        <div class="form-field">
            <label class="form-field__label">{label}</label>
            <Input value=value placeholder=placeholder input_type=input_type />
        </div>
    }
}

#[derive(Clone, Copy)]
struct LoginFields {
    email: RwSignal<String>,
    password: RwSignal<String>,
    remember_me: RwSignal<bool>,
}

impl LoginFields {
    fn new() -> Self {
        Self {
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            remember_me: RwSignal::new(false),
        }
    }

    fn snapshot(&self) -> LoginForm {
        LoginForm {
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            remember_me: self.remember_me.get_untracked(),
        }
    }
}

#[derive(Clone, Copy)]
struct RegistrationFields {
    company_name: RwSignal<String>,
    name: RwSignal<String>,
    contact_person: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    location: RwSignal<String>,
    gst_number: RwSignal<String>,
    pan_number: RwSignal<String>,
    license_number: RwSignal<String>,
    use_qr: RwSignal<bool>,
    agree_to_terms: RwSignal<bool>,
}

impl RegistrationFields {
    fn new() -> Self {
        Self {
            company_name: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            contact_person: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            location: RwSignal::new(String::new()),
            gst_number: RwSignal::new(String::new()),
            pan_number: RwSignal::new(String::new()),
            license_number: RwSignal::new(String::new()),
            use_qr: RwSignal::new(false),
            agree_to_terms: RwSignal::new(false),
        }
    }

    fn snapshot(&self) -> RegistrationForm {
        RegistrationForm {
            company_name: self.company_name.get_untracked(),
            name: self.name.get_untracked(),
            contact_person: self.contact_person.get_untracked(),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            location: self.location.get_untracked(),
            gst_number: self.gst_number.get_untracked(),
            pan_number: self.pan_number.get_untracked(),
            license_number: self.license_number.get_untracked(),
            use_qr: self.use_qr.get_untracked(),
            agree_to_terms: self.agree_to_terms.get_untracked(),
        }
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let runner = use_action_runner();

    let initial_mode = FormMode::from_query(ctx.query.get_untracked().mode.as_deref());
    let mode = RwSignal::new(initial_mode);
    let active_role = RwSignal::new(ctx.signed_in.get_untracked());
    let submitting = RwSignal::new(false);

    let login = LoginFields::new();
    let registration = RegistrationFields::new();

    let submit = move |_| {
        let Some(role) = active_role.get_untracked() else {
            return;
        };
        let form_mode = mode.get_untracked();
        let kind = match form_mode {
            FormMode::Login => ActionKind::LoginSubmit,
            FormMode::Register => ActionKind::RegistrationSubmit,
        };
        let action = ctx.action(kind);

        let started = runner.with_value(|r| {
            r.start(WidgetId::new(SUBMIT_WIDGET), action, move |_| {
                submitting.set(false);
                let (validated, form_name, success) = match form_mode {
                    FormMode::Login => (
                        login.snapshot().validate(),
                        LoginForm::NAME,
                        login_success_toast(),
                    ),
                    FormMode::Register => (
                        registration.snapshot().validate(role),
                        RegistrationForm::NAME,
                        registration_success_toast(role),
                    ),
                };
                match validated {
                    Ok(()) => {
                        toasts.notify(success);
                        ctx.sign_in(role);
                    }
                    Err(e) => {
                        log::warn!("{}", e);
                        toasts.notify(failure_toast(form_name));
                    }
                }
            })
        });
        match started {
            Ok(_) => submitting.set(true),
            Err(e) => log::warn!("{}", e),
        }
    };

    view! {
        <div class="profile-page">
            <TopHeader />

            <div class="profile-page__body">
                <h1>"Join NexQ"</h1>
                <div class="role-picker">
                    {Role::all().into_iter().map(|role| view! {
                        <div
                            class="role-picker__item"
                            class:role-picker__item--active=move || active_role.get() == Some(role)
                            on:click=move |_| active_role.set(Some(role))
                        >
                            {icon(role_icon(role))}
                            <span>{role.display_name()}</span>
                        </div>
                    }).collect_view()}
                </div>

                {move || match active_role.get() {
                    None => view! {
                        <p class="profile-page__hint">"Select a role to register or sign in"</p>
                    }.into_any(),
                    Some(role) => view! {
                        <div class="profile-page__form">
                            <div class="profile-page__tabs">
                                <button
                                    class="profile-page__tab"
                                    class:profile-page__tab--active=move || mode.get() == FormMode::Register
                                    on:click=move |_| mode.set(FormMode::Register)
                                >
                                    "Register"
                                </button>
                                <button
                                    class="profile-page__tab"
                                    class:profile-page__tab--active=move || mode.get() == FormMode::Login
                                    on:click=move |_| mode.set(FormMode::Login)
                                >
                                    "Login"
                                </button>
                            </div>

                            {move || match mode.get() {
                                FormMode::Login => view! {
                                    <Field label="Email ID" value=login.email placeholder="your@email.com" />
                                    <Field label="Password" value=login.password placeholder="••••••••" password=true />
                                    <Checkbox checked=login.remember_me label="Remember Me" />
                                }.into_any(),
                                FormMode::Register => view! {
                                    {if role == Role::Manufacturer {
                                        view! { <Field label=name_label(role) value=registration.company_name placeholder="Your Company Name" /> }.into_any()
                                    } else {
                                        view! { <Field label=name_label(role) value=registration.name placeholder="Your Business Name" /> }.into_any()
                                    }}
                                    <Field label="Contact Person*" value=registration.contact_person placeholder="Full Name" />
                                    <Field label="Email*" value=registration.email placeholder="your@email.com" />
                                    <Field label="Phone*" value=registration.phone placeholder="10-digit number" />
                                    <Field label="Location*" value=registration.location placeholder="City, State" />
                                    <Field label="GST Number*" value=registration.gst_number placeholder="15-digit GST Number" />
                                    <Field label="PAN Number*" value=registration.pan_number placeholder="10-digit PAN Number" />
                                    <Field label="License Number*" value=registration.license_number placeholder="License Number" />
                                    <Checkbox checked=registration.use_qr label="Use QR code for inventory tracking" />
                                    <Checkbox checked=registration.agree_to_terms label="I agree to the terms and conditions" />
                                }.into_any(),
                            }}

                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || submitting.get())
                                on_click=submit
                            >
                                {move || match (submitting.get(), mode.get()) {
                                    (true, _) => "Please wait...",
                                    (false, FormMode::Login) => "Login",
                                    (false, FormMode::Register) => "Register",
                                }}
                            </Button>
                        </div>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_mode_from_query() {
        assert_eq!(FormMode::from_query(Some("login")), FormMode::Login);
        assert_eq!(FormMode::from_query(Some("register")), FormMode::Register);
        assert_eq!(FormMode::from_query(None), FormMode::Register);
    }

    #[test]
    fn test_name_label() {
        assert_eq!(name_label(Role::Manufacturer), "Company Name*");
        assert_eq!(name_label(Role::Retailer), "Retailer Name*");
    }
}

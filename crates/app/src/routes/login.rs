use dioxus::prelude::*;
use shared_types::{signed_in_home, AppError, FeatureFlags, Navigator as _};
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Form, TextField,
};
use std::collections::HashMap;

use crate::auth::use_auth;
use crate::guard::RouterNavigator;

/// Email/password sign-in. On success the session is sent to its role's
/// dashboard.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let flags: FeatureFlags = use_context();
    let nav = RouterNavigator::current();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Already signed in on this client: skip the form. Runs once on mount.
    use_effect(move || {
        if let Some(home) = signed_in_home(&auth) {
            nav.go_to(home);
        }
    });

    let handle_login = move |_: FormEvent| async move {
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        match server::api::login(email(), password()).await {
            Ok(user) => {
                let home = user.role.home_path();
                auth.set_user(user);
                nav.go_to(home);
            }
            Err(e) => {
                let raw = e.to_string();
                let fields = AppError::parse_field_errors(&raw);
                if fields.is_empty() {
                    error_msg.set(Some(AppError::friendly_message(&raw)));
                } else {
                    field_errors.set(fields);
                }
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign in to Ushuari" }
                    CardDescription { "Use your admin, partner, or client account" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }

                    Form { onsubmit: handle_login,
                        TextField {
                            id: "email",
                            label: "Email",
                            input_type: "email",
                            autocomplete: "username",
                            placeholder: "you@example.com",
                            value: email(),
                            error: field_errors.read().get("email").cloned(),
                            on_input: move |evt: FormEvent| email.set(evt.value()),
                        }
                        TextField {
                            id: "password",
                            label: "Password",
                            input_type: "password",
                            autocomplete: "current-password",
                            value: password(),
                            error: field_errors.read().get("password").cloned(),
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        Button {
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }

                    if flags.demo_seed {
                        div { class: "auth-demo",
                            p { class: "auth-demo-title", "Demo accounts" }
                            ul {
                                li { code { "admin@ushuari.com" } " (admin)" }
                                li { code { "contact@legalexperts.com" } " (organization)" }
                                li { code { "client@ushuari.com" } " (user)" }
                            }
                            p { "Password: " code { "ushuari-demo" } }
                        }
                    }
                }
            }
        }
    }
}

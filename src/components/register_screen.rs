use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::{RegisterRequest, Session};
use crate::services::{session_service, ApiClient};

#[derive(Properties, PartialEq)]
pub struct RegisterScreenProps {
    pub on_register_success: Callback<Session>,
    pub on_back_to_login: Callback<()>,
}

/// Alta de usuario. Un 201 devuelve token + user, así que el registro
/// deja la sesión iniciada sin pasar otra vez por el login.
#[function_component(RegisterScreen)]
pub fn register_screen(props: &RegisterScreenProps) -> Html {
    let username_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let confirm_ref = use_node_ref();
    let error = use_state(String::new);
    let loading = use_state(|| false);

    let on_submit = {
        let username_ref = username_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let confirm_ref = confirm_ref.clone();
        let error = error.clone();
        let loading = loading.clone();
        let on_register_success = props.on_register_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let inputs = (
                username_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
                confirm_ref.cast::<HtmlInputElement>(),
            );
            let (Some(username), Some(email), Some(password), Some(confirm)) = inputs else {
                return;
            };

            let request = RegisterRequest {
                username: username.value(),
                email: email.value(),
                password: password.value(),
                password_confirm: confirm.value(),
            };

            if request.username.is_empty() || request.email.is_empty() || request.password.is_empty()
            {
                error.set("Please fill in all fields".to_string());
                return;
            }
            if request.password != request.password_confirm {
                error.set("Passwords do not match".to_string());
                return;
            }

            error.set(String::new());
            loading.set(true);

            let error = error.clone();
            let loading = loading.clone();
            let on_register_success = on_register_success.clone();
            spawn_local(async move {
                let api = ApiClient::new();
                match api.register(&request).await {
                    Ok(response) => {
                        let session = response.into_session();
                        if let Err(e) = session_service::save(&session) {
                            log::warn!("⚠️ No se pudo persistir la sesión: {}", e);
                        }
                        log::info!("✅ Usuario registrado: {}", session.username);
                        on_register_success.emit(session);
                    }
                    Err(e) => {
                        log::error!("❌ Registro fallido: {}", e);
                        error.set(e.to_string());
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="login-container">
            <div class="login-box">
                <h1>{"Equipment Analytics"}</h1>
                <h2>{"Register"}</h2>

                { if !error.is_empty() {
                    html! { <div class="error-message">{(*error).clone()}</div> }
                } else {
                    html! {}
                } }

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="reg-username">{"Username"}</label>
                        <input
                            type="text"
                            id="reg-username"
                            placeholder="Choose a username"
                            ref={username_ref}
                            required=true
                            disabled={*loading}
                        />
                    </div>

                    <div class="form-group">
                        <label for="reg-email">{"Email"}</label>
                        <input
                            type="email"
                            id="reg-email"
                            placeholder="you@example.com"
                            ref={email_ref}
                            required=true
                            disabled={*loading}
                        />
                    </div>

                    <div class="form-group">
                        <label for="reg-password">{"Password"}</label>
                        <input
                            type="password"
                            id="reg-password"
                            placeholder="Choose a password"
                            ref={password_ref}
                            required=true
                            disabled={*loading}
                        />
                    </div>

                    <div class="form-group">
                        <label for="reg-confirm">{"Confirm Password"}</label>
                        <input
                            type="password"
                            id="reg-confirm"
                            placeholder="Repeat the password"
                            ref={confirm_ref}
                            required=true
                            disabled={*loading}
                        />
                    </div>

                    <button type="submit" disabled={*loading}>
                        { if *loading { "Creating account..." } else { "Register" } }
                    </button>
                </form>

                <div class="switch-link">
                    <button type="button" onclick={props.on_back_to_login.reform(|_| ())}>
                        {"Back to login"}
                    </button>
                </div>
            </div>
        </div>
    }
}

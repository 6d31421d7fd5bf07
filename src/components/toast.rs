use yew::prelude::*;
use gloo_timers::callback::Timeout;

/// How long a confirmation stays on screen before closing itself.
pub const TOAST_LIFETIME_MS: u32 = 6_000;

/// One confirmation. The serial tells repeated identical messages apart.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub serial: u32,
    pub message: AttrValue,
}

impl Notice {
    pub fn next(counter: &mut u32, message: impl Into<AttrValue>) -> Self {
        *counter = counter.wrapping_add(1);
        Self { serial: *counter, message: message.into() }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Notice,
    pub on_close: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(TOAST_LIFETIME_MS, move || on_close.emit(()));
                // Dropping the handle cancels the timer if the toast goes away first.
                move || drop(timeout)
            },
            props.notice.clone(),
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="toast" role="status">
            <style>
                {r#"
                .toast {
                    position: fixed;
                    bottom: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    max-width: calc(100% - 2rem);
                    border-radius: 1rem;
                    background: #0f172a;
                    padding: 1rem 1.25rem;
                    color: #fff;
                    box-shadow: 0 16px 32px rgba(15, 23, 42, 0.3);
                    animation: toastIn 0.3s ease-out forwards;
                }
                .toast-close {
                    border: none;
                    background: none;
                    color: #94a3b8;
                    font-size: 1.25rem;
                    cursor: pointer;
                }
                @keyframes toastIn {
                    from { opacity: 0; transform: translate(-50%, 1rem); }
                    to { opacity: 1; transform: translate(-50%, 0); }
                }
                "#}
            </style>
            <span>{&props.notice.message}</span>
            <button class="toast-close" onclick={close} aria-label="Fermer">{"×"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_message_still_restarts_the_timer() {
        let mut counter = 0;
        let first = Notice::next(&mut counter, "Merci !");
        let second = Notice::next(&mut counter, "Merci !");
        assert_eq!(first.message, second.message);
        assert_ne!(first, second);
        assert_eq!(second.serial, 2);
    }
}

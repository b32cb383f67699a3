use yew::prelude::*;
use yew::use_effect_with;
use yew_hooks::prelude::use_timeout;

use crate::i18n::current::toast as t;

const AUTO_DISMISS_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub level: ToastLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Notice,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let is_open = use_state(|| true);

    let dismiss = {
        let is_open = is_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            if !*is_open {
                return;
            }
            is_open.set(false);
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    let auto_timeout = {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), AUTO_DISMISS_MS)
    };

    {
        let is_open = is_open.clone();
        let auto_timeout = auto_timeout.clone();
        use_effect_with(props.notice.clone(), move |_| {
            is_open.set(true);
            auto_timeout.reset();
        });
    }

    if props.notice.message.trim().is_empty() {
        return Html::default();
    }

    let (icon, title, tone) = match props.notice.level {
        ToastLevel::Success => ("✅", t::SUCCESS_TITLE, "border-emerald-500/40"),
        ToastLevel::Error => ("⚠️", t::ERROR_TITLE, "border-red-500/40"),
    };

    let mut wrapper_classes = classes!(
        "toast",
        "fixed",
        "top-6",
        "right-6",
        "z-50",
        "flex",
        "items-start",
        "gap-3",
        "rounded-2xl",
        "border",
        tone,
        "bg-[var(--surface)]",
        "px-5",
        "py-4",
        "text-sm",
        "shadow-xl",
        "transition-all",
        "duration-300",
        "ease-out",
        "max-w-md"
    );

    if *is_open {
        wrapper_classes.push("opacity-100");
        wrapper_classes.push("translate-y-0");
    } else {
        wrapper_classes.push("opacity-0");
        wrapper_classes.push("-translate-y-2");
        wrapper_classes.push("pointer-events-none");
    }

    let close_button = {
        let dismiss = dismiss.clone();
        Callback::from(move |_| dismiss.emit(()))
    };

    let role = match props.notice.level {
        ToastLevel::Success => "status",
        ToastLevel::Error => "alert",
    };

    html! {
        <div class={wrapper_classes} role={role} aria-live="polite">
            <span class="text-2xl" aria-hidden="true">{ icon }</span>
            <div class="flex-1 space-y-1">
                <p class="font-semibold text-base">{ title }</p>
                <p>{ props.notice.message.clone() }</p>
            </div>
            <button
                type="button"
                class={classes!(
                    "ml-4",
                    "inline-flex",
                    "h-8",
                    "w-8",
                    "items-center",
                    "justify-center",
                    "rounded-full",
                    "bg-transparent",
                    "text-lg",
                    "transition",
                    "duration-200",
                    "hover:bg-black/10",
                    "dark:hover:bg-white/15"
                )}
                aria-label={t::ARIA_CLOSE}
                onclick={close_button}
            >
                {"×"}
            </button>
        </div>
    }
}

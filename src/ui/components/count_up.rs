use std::time::Duration;

use dioxus::prelude::*;

use crate::ui::animation::{counter_frame, Easing, FRAME};
use crate::util::format_thousands;

const DEFAULT_CLASS: &str = "text-4xl md:text-5xl font-black text-white flex items-baseline justify-center";

/// Number that counts up from zero when first rendered.
#[component]
pub fn CountUp(
    target: u64,
    suffix: String,
    #[props(default = 2000)] duration_ms: u64,
    #[props(default)] easing: Easing,
    #[props(default = DEFAULT_CLASS.to_string())] class: String,
    #[props(default = "text-blue-500".to_string())] suffix_class: String,
) -> Element {
    let mut value = use_signal(|| 0u64);

    use_future(move || async move {
        let duration = Duration::from_millis(duration_ms);
        let mut elapsed = Duration::ZERO;
        while elapsed < duration {
            tokio::time::sleep(FRAME).await;
            elapsed += FRAME;
            value.set(counter_frame(target, elapsed, duration, easing));
        }
        value.set(target);
    });

    rsx! {
        div { class: "{class}",
            span { "{format_thousands(value())}" }
            span { class: "{suffix_class}", "{suffix}" }
        }
    }
}

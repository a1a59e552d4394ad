use dioxus::prelude::*;

use crate::domain::RiskLevel;

#[component]
pub fn RiskBadge(level: RiskLevel) -> Element {
    let color = match level {
        RiskLevel::Low => "bg-green-500/10 text-green-300 border-green-500/40",
        RiskLevel::Moderate => "bg-amber-500/10 text-amber-300 border-amber-500/40",
        RiskLevel::High => "bg-brand-danger/10 text-brand-danger border-brand-danger/40",
    };

    rsx! {
        span {
            class: "inline-flex items-center rounded-full border px-3 py-1 text-[10px] font-black uppercase tracking-widest {color}",
            "{level.label()} RISK"
        }
    }
}

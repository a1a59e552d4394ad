//! Shared class strings so pages stay visually consistent.

// ============================================
// SURFACES
// ============================================

pub fn panel() -> &'static str {
    "bg-slate-900/40 border border-app-border p-10 rounded-4xl backdrop-blur-md"
}

pub fn stat_panel() -> &'static str {
    "bg-slate-900/40 border border-slate-800 p-6 rounded-3xl"
}

pub fn placeholder_panel() -> &'static str {
    "h-full border-2 border-dashed border-app-border rounded-5xl flex flex-col items-center justify-center p-12 text-nav-fg bg-slate-900/10 text-center"
}

pub fn result_panel() -> &'static str {
    "h-full bg-gradient-to-b from-slate-900 to-black border border-app-border p-10 rounded-5xl flex flex-col items-center justify-center text-center relative overflow-hidden shadow-2xl"
}

pub fn error_box() -> &'static str {
    "bg-red-500/10 border border-red-500/40 text-red-500 text-xs font-bold p-4 rounded-xl"
}

pub fn success_box() -> &'static str {
    "bg-green-500/10 border border-green-500/40 text-green-400 text-xs font-bold p-4 rounded-xl"
}

// ============================================
// TEXT
// ============================================

pub fn label_class() -> &'static str {
    "text-[10px] font-black text-nav-fg uppercase tracking-widest mb-3 block"
}

pub fn page_title() -> &'static str {
    "text-3xl font-black italic tracking-tighter uppercase"
}

pub fn page_subtitle() -> &'static str {
    "text-nav-fg font-bold text-xs uppercase tracking-[0.2em]"
}

// ============================================
// CONTROLS
// ============================================

pub fn input_class() -> &'static str {
    "w-full bg-app-bg border border-app-border rounded-2xl p-4 text-sm outline-none focus:border-brand-blue transition-all"
}

pub fn auth_input_class() -> &'static str {
    "w-full bg-slate-900 border border-slate-800 rounded-2xl p-4 text-sm focus:border-blue-500 focus:ring-1 focus:ring-blue-500 outline-none transition-all"
}

pub fn btn_primary() -> &'static str {
    "w-full mt-10 bg-brand-blue hover:opacity-90 disabled:opacity-60 text-white font-black py-5 rounded-2xl flex items-center justify-center gap-3 uppercase tracking-widest text-xs transition-all shadow-xl shadow-brand-blue/20"
}

pub fn btn_auth() -> &'static str {
    "w-full bg-blue-600 hover:bg-blue-500 active:scale-[0.98] disabled:opacity-60 text-white font-bold py-4 rounded-xl transition-all flex items-center justify-center gap-3 text-sm"
}

pub fn nav_link(active: bool) -> &'static str {
    if active {
        "w-full flex items-center gap-3 px-4 py-3 rounded-xl font-bold text-sm transition-all bg-brand-blue text-white shadow-lg shadow-brand-blue/40"
    } else {
        "w-full flex items-center gap-3 px-4 py-3 rounded-xl font-bold text-sm transition-all text-nav-fg hover:bg-nav-hover hover:text-white"
    }
}

// ============================================
// RESULT ACCENTS
// ============================================

pub fn status_pill(danger: bool) -> &'static str {
    if danger {
        "py-4 px-8 rounded-2xl border font-black uppercase tracking-widest text-sm bg-brand-danger/20 text-brand-danger border-brand-danger/30"
    } else {
        "py-4 px-8 rounded-2xl border font-black uppercase tracking-widest text-sm bg-green-500/20 text-green-400 border-green-500/30"
    }
}

pub fn glow(danger: bool) -> &'static str {
    if danger {
        "glow-danger"
    } else {
        "glow-safe"
    }
}

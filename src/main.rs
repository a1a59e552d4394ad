#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod infra;
mod ui;
mod util;

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::dpi::LogicalSize, tao::window::WindowBuilder, Config as DesktopConfig};

use crate::util::version::{current_version, APP_NAME};

fn main() {
    dioxus::logger::initialize_default();

    #[cfg(all(feature = "desktop", target_os = "linux"))]
    prefer_stable_wayland_renderer();

    match current_version() {
        Ok(version) => tracing::info!("starting {APP_NAME} {version}"),
        Err(err) => tracing::warn!("starting {APP_NAME} with unreadable version: {err}"),
    }

    let builder = LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = builder.with_cfg(desktop! {
        DesktopConfig::new().with_window(
            WindowBuilder::new()
                .with_title(APP_NAME)
                .with_inner_size(LogicalSize::new(1280.0, 860.0))
                .with_min_inner_size(LogicalSize::new(960.0, 640.0))
        )
    });

    builder.launch(app::App);
}

/// WebKitGTK's DMABUF renderer and explicit sync crash on some Wayland drivers.
/// Either variable can still be set by the caller to opt back in.
#[cfg(all(feature = "desktop", target_os = "linux"))]
fn prefer_stable_wayland_renderer() {
    if std::env::var_os("WAYLAND_DISPLAY").is_none() {
        return;
    }
    for (key, value) in [("WGPU_BACKEND", "gl"), ("WEBKIT_DISABLE_DMABUF_RENDERER", "1")] {
        if std::env::var_os(key).is_none() {
            std::env::set_var(key, value);
        }
    }
}

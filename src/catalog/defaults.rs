//! Built-in catalog used when no manifest can be loaded

use super::{Catalog, InstallerKind, ToolDescriptor, ToolKind};

/// The fallback catalog. Always non-empty and covers both tool kinds.
pub fn builtin_catalog() -> Catalog {
    Catalog::new(vec![
        ToolDescriptor::new(
            "WinDirStat",
            "static/WinDirStat-x64.msi",
            ToolKind::Static,
            "Maintenance",
        )
        .with_installer(InstallerKind::Msi),
        ToolDescriptor::new(
            "WinRAR",
            "static/winrar-x64.exe",
            ToolKind::Static,
            "Maintenance",
        )
        .with_installer(InstallerKind::Exe),
        ToolDescriptor::new(
            "VLC Media Player",
            "static/vlc-3.0.18.exe",
            ToolKind::Static,
            "Maintenance",
        )
        .with_installer(InstallerKind::Exe),
        ToolDescriptor::new(
            "Malwarebytes",
            "https://data-cdn.mbamupdates.com/web/mb-windows/MBSetup.exe",
            ToolKind::Dynamic,
            "Security",
        )
        .with_installer(InstallerKind::Exe)
        .with_silent_args("/VERYSILENT /SUPPRESSMSGBOXES /NORESTART"),
    ])
}

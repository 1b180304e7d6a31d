//! Reason symbols.
//!
//! Reasons travel as strings between the package manager, the background
//! job and the command-line tool. The string set is documented and may
//! grow; [`Reason`] covers the symbols this crate knows about.

use std::fmt;
use std::str::FromStr;

use crate::constants::{
    REASON_BG_DEXOPT, REASON_BOOT_AFTER_OTA, REASON_CMDLINE, REASON_FIRST_BOOT, REASON_INACTIVE,
    REASON_INSTALL, REASON_INSTALL_BULK, REASON_INSTALL_BULK_DOWNGRADED,
    REASON_INSTALL_BULK_SECONDARY, REASON_INSTALL_BULK_SECONDARY_DOWNGRADED, REASON_INSTALL_FAST,
};
use crate::errors::DexoptError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Reason {
    /// First boot of a fresh device.
    FirstBoot,
    /// First boot after a system update.
    BootAfterOta,
    /// A single package install.
    Install,
    /// An install where the user is waiting.
    InstallFast,
    /// One package of a multi-package install.
    InstallBulk,
    /// Bulk install of a secondary user's packages.
    InstallBulkSecondary,
    /// Bulk install allowed to downgrade the compiler filter.
    InstallBulkDowngraded,
    /// Bulk install of a secondary user's packages, allowed to downgrade.
    InstallBulkSecondaryDowngraded,
    /// Scheduled background dexopt.
    BgDexopt,
    /// Idle maintenance of packages not used for a while.
    Inactive,
    /// Explicit command-line request.
    Cmdline,
}

impl Reason {
    pub const ALL: [Reason; 11] = [
        Reason::FirstBoot,
        Reason::BootAfterOta,
        Reason::Install,
        Reason::InstallFast,
        Reason::InstallBulk,
        Reason::InstallBulkSecondary,
        Reason::InstallBulkDowngraded,
        Reason::InstallBulkSecondaryDowngraded,
        Reason::BgDexopt,
        Reason::Inactive,
        Reason::Cmdline,
    ];

    /// The wire symbol.
    pub const fn as_str(self) -> &'static str {
        match self {
            Reason::FirstBoot => REASON_FIRST_BOOT,
            Reason::BootAfterOta => REASON_BOOT_AFTER_OTA,
            Reason::Install => REASON_INSTALL,
            Reason::InstallFast => REASON_INSTALL_FAST,
            Reason::InstallBulk => REASON_INSTALL_BULK,
            Reason::InstallBulkSecondary => REASON_INSTALL_BULK_SECONDARY,
            Reason::InstallBulkDowngraded => REASON_INSTALL_BULK_DOWNGRADED,
            Reason::InstallBulkSecondaryDowngraded => REASON_INSTALL_BULK_SECONDARY_DOWNGRADED,
            Reason::BgDexopt => REASON_BG_DEXOPT,
            Reason::Inactive => REASON_INACTIVE,
            Reason::Cmdline => REASON_CMDLINE,
        }
    }

    /// `true` for the install family, including bulk variants.
    pub const fn is_install(self) -> bool {
        matches!(
            self,
            Reason::Install
                | Reason::InstallFast
                | Reason::InstallBulk
                | Reason::InstallBulkSecondary
                | Reason::InstallBulkDowngraded
                | Reason::InstallBulkSecondaryDowngraded
        )
    }
}

impl FromStr for Reason {
    type Err = DexoptError;

    /// Exact, case-sensitive match against the wire symbols.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Reason::ALL
            .into_iter()
            .find(|reason| reason.as_str() == s)
            .ok_or_else(|| DexoptError::UnknownReason(s.to_owned()))
    }
}

impl TryFrom<String> for Reason {
    type Error = DexoptError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Reason> for String {
    fn from(reason: Reason) -> Self {
        reason.as_str().to_owned()
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

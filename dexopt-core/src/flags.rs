//! Request flags — the scope and intensity of an optimization request.
//!
//! [`RequestFlags`] is a set over the closed [`DexFlag`] enumeration. The
//! in-memory form is the wire form (a `u32` with bits 0–5), so union and
//! intersection stay single instructions while call sites use named
//! accessors instead of raw bits.
//!
//! ## Single-split contract
//!
//! When `FOR_SINGLE_SPLIT` is set, `FOR_PRIMARY_DEX` must be set and neither
//! `FOR_SECONDARY_DEX` nor `INCLUDE_DEPENDENCIES` may be. The representation
//! does not enforce this; [`RequestFlags::validate_single_split`] checks it
//! and [`crate::params::OptimizeParams`] calls it on build.

use std::fmt;
use std::ops::{BitAnd, BitOr};

use crate::constants::{
    DELETE_FLAGS_MASK, FLAG_FORCE, FLAG_FOR_PRIMARY_DEX, FLAG_FOR_SECONDARY_DEX,
    FLAG_FOR_SINGLE_SPLIT, FLAG_SHOULD_DOWNGRADE, FLAG_SHOULD_INCLUDE_DEPENDENCIES,
    GET_STATUS_FLAGS_MASK, OPTIMIZE_FLAGS_MASK,
};
use crate::errors::DexoptError;

/// One facet of a request. Discriminants are the wire bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum DexFlag {
    ForPrimaryDex = FLAG_FOR_PRIMARY_DEX,
    ForSecondaryDex = FLAG_FOR_SECONDARY_DEX,
    IncludeDependencies = FLAG_SHOULD_INCLUDE_DEPENDENCIES,
    ShouldDowngrade = FLAG_SHOULD_DOWNGRADE,
    Force = FLAG_FORCE,
    ForSingleSplit = FLAG_FOR_SINGLE_SPLIT,
}

impl DexFlag {
    /// All facets in bit order.
    pub const ALL: [DexFlag; 6] = [
        DexFlag::ForPrimaryDex,
        DexFlag::ForSecondaryDex,
        DexFlag::IncludeDependencies,
        DexFlag::ShouldDowngrade,
        DexFlag::Force,
        DexFlag::ForSingleSplit,
    ];

    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Diagnostic name, as used in logs and error messages.
    pub const fn name(self) -> &'static str {
        match self {
            DexFlag::ForPrimaryDex => "FOR_PRIMARY_DEX",
            DexFlag::ForSecondaryDex => "FOR_SECONDARY_DEX",
            DexFlag::IncludeDependencies => "INCLUDE_DEPENDENCIES",
            DexFlag::ShouldDowngrade => "SHOULD_DOWNGRADE",
            DexFlag::Force => "FORCE",
            DexFlag::ForSingleSplit => "FOR_SINGLE_SPLIT",
        }
    }
}

/// The operation a raw flag value is decoded for. Each context recognizes
/// a different subset of bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagContext {
    /// Deleting optimized artifacts: dex kind bits only.
    Delete,
    /// Querying optimization status: dex kind bits only.
    GetStatus,
    /// Optimizing: all six bits.
    Optimize,
}

impl FlagContext {
    pub const fn mask(self) -> u32 {
        match self {
            FlagContext::Delete => DELETE_FLAGS_MASK,
            FlagContext::GetStatus => GET_STATUS_FLAGS_MASK,
            FlagContext::Optimize => OPTIMIZE_FLAGS_MASK,
        }
    }
}

impl fmt::Display for FlagContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FlagContext::Delete => "delete",
            FlagContext::GetStatus => "get-status",
            FlagContext::Optimize => "optimize",
        })
    }
}

/// An immutable set of [`DexFlag`]s.
///
/// Combination always produces a new value; no operation changes a set in
/// place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct RequestFlags(u32);

impl RequestFlags {
    pub const EMPTY: RequestFlags = RequestFlags(0);
    pub const FOR_PRIMARY_DEX: RequestFlags = RequestFlags(FLAG_FOR_PRIMARY_DEX);
    pub const FOR_SECONDARY_DEX: RequestFlags = RequestFlags(FLAG_FOR_SECONDARY_DEX);
    pub const INCLUDE_DEPENDENCIES: RequestFlags = RequestFlags(FLAG_SHOULD_INCLUDE_DEPENDENCIES);
    pub const SHOULD_DOWNGRADE: RequestFlags = RequestFlags(FLAG_SHOULD_DOWNGRADE);
    pub const FORCE: RequestFlags = RequestFlags(FLAG_FORCE);
    pub const FOR_SINGLE_SPLIT: RequestFlags = RequestFlags(FLAG_FOR_SINGLE_SPLIT);

    /// Decode raw wire bits for the given operation.
    ///
    /// # Errors
    /// Returns `DexoptError::UnknownFlagBits` if `raw` has any bit outside
    /// `context.mask()`.
    pub fn from_bits(raw: u32, context: FlagContext) -> Result<Self, DexoptError> {
        let unknown = raw & !context.mask();
        if unknown != 0 {
            return Err(DexoptError::UnknownFlagBits {
                context,
                bits: unknown,
            });
        }
        Ok(RequestFlags(raw))
    }

    /// Decode raw wire bits, dropping any bit the operation does not
    /// recognize.
    pub const fn from_bits_truncate(raw: u32, context: FlagContext) -> Self {
        RequestFlags(raw & context.mask())
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `true` if every bit of `other` is in `self`.
    pub const fn contains(self, other: RequestFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn contains_flag(self, flag: DexFlag) -> bool {
        self.0 & flag.bits() != 0
    }

    /// `true` if `self` and `other` share at least one bit.
    pub const fn intersects(self, other: RequestFlags) -> bool {
        self.0 & other.0 != 0
    }

    #[must_use]
    pub const fn union(self, other: RequestFlags) -> Self {
        RequestFlags(self.0 | other.0)
    }

    #[must_use]
    pub const fn intersection(self, other: RequestFlags) -> Self {
        RequestFlags(self.0 & other.0)
    }

    #[must_use]
    pub const fn difference(self, other: RequestFlags) -> Self {
        RequestFlags(self.0 & !other.0)
    }

    /// A copy of `self` with `flag` added.
    #[must_use]
    pub const fn with(self, flag: DexFlag) -> Self {
        RequestFlags(self.0 | flag.bits())
    }

    /// Contained facets in bit order.
    pub fn iter(self) -> impl Iterator<Item = DexFlag> {
        DexFlag::ALL
            .into_iter()
            .filter(move |flag| self.contains_flag(*flag))
    }

    pub const fn for_primary_dex(self) -> bool {
        self.contains_flag(DexFlag::ForPrimaryDex)
    }

    pub const fn for_secondary_dex(self) -> bool {
        self.contains_flag(DexFlag::ForSecondaryDex)
    }

    pub const fn include_dependencies(self) -> bool {
        self.contains_flag(DexFlag::IncludeDependencies)
    }

    pub const fn should_downgrade(self) -> bool {
        self.contains_flag(DexFlag::ShouldDowngrade)
    }

    pub const fn force(self) -> bool {
        self.contains_flag(DexFlag::Force)
    }

    pub const fn for_single_split(self) -> bool {
        self.contains_flag(DexFlag::ForSingleSplit)
    }

    /// Check the single-split contract. Sets without `FOR_SINGLE_SPLIT`
    /// always pass.
    ///
    /// # Errors
    /// Returns `DexoptError::InvalidSingleSplit` describing the violation.
    pub fn validate_single_split(self) -> Result<(), DexoptError> {
        if !self.for_single_split() {
            return Ok(());
        }
        if !self.for_primary_dex() {
            return Err(DexoptError::InvalidSingleSplit(format!(
                "{self} lacks FOR_PRIMARY_DEX"
            )));
        }
        let disallowed =
            self.intersection(RequestFlags::FOR_SECONDARY_DEX | RequestFlags::INCLUDE_DEPENDENCIES);
        if !disallowed.is_empty() {
            return Err(DexoptError::InvalidSingleSplit(format!(
                "{self} must not include {disallowed}"
            )));
        }
        Ok(())
    }
}

/// Default flags for deleting optimized artifacts.
pub const fn default_delete_flags() -> RequestFlags {
    RequestFlags::FOR_PRIMARY_DEX
}

/// Default flags for querying optimization status.
pub const fn default_get_status_flags() -> RequestFlags {
    RequestFlags::FOR_PRIMARY_DEX
}

impl From<DexFlag> for RequestFlags {
    fn from(flag: DexFlag) -> Self {
        RequestFlags(flag.bits())
    }
}

impl FromIterator<DexFlag> for RequestFlags {
    fn from_iter<I: IntoIterator<Item = DexFlag>>(iter: I) -> Self {
        iter.into_iter().fold(RequestFlags::EMPTY, RequestFlags::with)
    }
}

impl From<RequestFlags> for u32 {
    fn from(flags: RequestFlags) -> Self {
        flags.0
    }
}

/// Wire decoding uses the widest (optimize) context.
impl TryFrom<u32> for RequestFlags {
    type Error = DexoptError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        RequestFlags::from_bits(raw, FlagContext::Optimize)
    }
}

impl BitOr for RequestFlags {
    type Output = RequestFlags;

    fn bitor(self, rhs: RequestFlags) -> RequestFlags {
        self.union(rhs)
    }
}

impl BitAnd for RequestFlags {
    type Output = RequestFlags;

    fn bitand(self, rhs: RequestFlags) -> RequestFlags {
        self.intersection(rhs)
    }
}

impl fmt::Display for RequestFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(empty)");
        }
        for (i, flag) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            f.write_str(flag.name())?;
        }
        Ok(())
    }
}

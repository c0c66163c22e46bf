use bitflags::bitflags;

bitflags! {
    /// Presence bits of a [`PropertyLerpDescriptor`](super::PropertyLerpDescriptor).
    ///
    /// One bit per (property, start|end) slot. `*_HPR` and `*_QUAT` are the two
    /// rotation modes of a slot and are never set together.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct LerpFlags: u32 {
        const END_POS          = 1 << 0;
        const END_HPR          = 1 << 1;
        const END_QUAT         = 1 << 2;
        const END_SCALE        = 1 << 3;
        const END_SHEAR        = 1 << 4;
        const END_COLOR        = 1 << 5;
        const END_COLOR_SCALE  = 1 << 6;
        const END_TEX_OFFSET   = 1 << 7;
        const END_TEX_ROTATION = 1 << 8;
        const END_TEX_SCALE    = 1 << 9;

        const START_POS          = 1 << 10;
        const START_HPR          = 1 << 11;
        const START_QUAT         = 1 << 12;
        const START_SCALE        = 1 << 13;
        const START_SHEAR        = 1 << 14;
        const START_COLOR        = 1 << 15;
        const START_COLOR_SCALE  = 1 << 16;
        const START_TEX_OFFSET   = 1 << 17;
        const START_TEX_ROTATION = 1 << 18;
        const START_TEX_SCALE    = 1 << 19;

        // Capture unspecified start values once, when the interval starts.
        const BAKE_IN_START = 1 << 20;
        // Quaternion interpolation parameters are precomputed.
        const SLERP_SETUP   = 1 << 21;

        const END_ROTATION   = Self::END_HPR.bits() | Self::END_QUAT.bits();
        const START_ROTATION = Self::START_HPR.bits() | Self::START_QUAT.bits();
    }
}

impl LerpFlags {
    /// All `END_*` presence bits.
    pub const ANY_END: Self = Self::from_bits_truncate((1 << 10) - 1);
    /// All `START_*` presence bits.
    pub const ANY_START: Self = Self::from_bits_truncate(((1 << 10) - 1) << 10);
    /// Every presence bit, start and end.
    pub const PRESENCE: Self = Self::ANY_END.union(Self::ANY_START);
}

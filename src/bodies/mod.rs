mod rigid_body;

pub use self::rigid_body::Body;
pub use self::body_flags::BodyFlags;

/// Flags for controlling body behavior
pub mod body_flags {
    use bitflags::bitflags;

    bitflags! {
        /// Flags for controlling how a body takes part in the simulation
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serialize", serde(transparent))]
        pub struct BodyFlags: u32 {
            /// Body never moves but still pushes dynamic bodies
            const STATIC = 0x01;

            /// Body is detected and notified but never resolved (pass-through)
            const SENSOR = 0x02;
        }
    }
}

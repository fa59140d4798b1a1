use std::fmt;
use std::str::FromStr;

use crate::foundation::error::ImagerError;

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
            serde::Deserialize,
        )]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $code)] $variant, )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Short code used in figure strings and asset names.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $code, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ImagerError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $code => Ok($name::$variant), )+
                    other => Err(ImagerError::validation(format!(
                        concat!("unknown ", stringify!($name), " {:?}"),
                        other
                    ))),
                }
            }
        }
    };
}

string_enum! {
    /// Body region tag of a figure part.
    pub enum FigurePartType {
        /// Hair.
        Hair => "hr",
        /// Hair drawn below a hat.
        HairBelow => "hrb",
        Head => "hd",
        Hat => "ha",
        HeadAcc => "he",
        /// Eye accessory, i.e. glasses.
        EyeAcc => "ea",
        /// Face accessory, i.e. masks.
        FaceAcc => "fa",
        Eyes => "ey",
        Face => "fc",
        Body => "bd",
        LeftHand => "lh",
        RightHand => "rh",
        /// Chest, i.e. shirts.
        Chest => "ch",
        ChestPrint => "cp",
        /// Chest accessory, i.e. jewellery.
        ChestAcc => "ca",
        LeftSleeve => "ls",
        RightSleeve => "rs",
        /// Legs, i.e. trousers.
        Legs => "lg",
        Shoes => "sh",
        /// Waist, i.e. belts.
        Waist => "wa",
        /// Coat or jacket.
        Coat => "cc",
        LeftCoat => "lc",
        RightCoat => "rc",
        LeftHandItem => "li",
        RightHandItem => "ri",
    }
}

impl FigurePartType {
    pub fn is_head(self) -> bool {
        matches!(
            self,
            Self::Hair
                | Self::HairBelow
                | Self::Head
                | Self::Hat
                | Self::HeadAcc
                | Self::EyeAcc
                | Self::FaceAcc
                | Self::Eyes
                | Self::Face
        )
    }

    pub fn is_body(self) -> bool {
        !self.is_head()
    }

    pub fn is_left_arm(self) -> bool {
        matches!(
            self,
            Self::LeftHand | Self::LeftSleeve | Self::LeftCoat | Self::LeftHandItem
        )
    }

    pub fn is_right_arm(self) -> bool {
        matches!(
            self,
            Self::RightHand | Self::RightSleeve | Self::RightCoat | Self::RightHandItem
        )
    }

    /// Swap left and right arm types; every other type maps to itself.
    pub fn flip(self) -> Self {
        match self {
            Self::LeftHand => Self::RightHand,
            Self::RightHand => Self::LeftHand,
            Self::LeftSleeve => Self::RightSleeve,
            Self::RightSleeve => Self::LeftSleeve,
            Self::LeftCoat => Self::RightCoat,
            Self::RightCoat => Self::LeftCoat,
            Self::LeftHandItem => Self::RightHandItem,
            Self::RightHandItem => Self::LeftHandItem,
            other => other,
        }
    }

    /// Whether the type may appear in a figure string.
    pub fn is_wearable(self) -> bool {
        matches!(
            self,
            Self::Head
                | Self::Hair
                | Self::Hat
                | Self::HeadAcc
                | Self::EyeAcc
                | Self::FaceAcc
                | Self::Chest
                | Self::ChestPrint
                | Self::Coat
                | Self::ChestAcc
                | Self::Legs
                | Self::Shoes
                | Self::Waist
        )
    }
}

string_enum! {
    /// Action or expression of an avatar.
    pub enum AvatarState {
        Stand => "std",
        Walk => "wlk",
        Wave => "wav",
        Lay => "lay",
        BlowKiss => "blw",
        /// Carrying a hand item.
        Carry => "crr",
        Drink => "drk",
        Respect => "respect",
        Sign => "sig",
        Sit => "sit",
        /// No expression; not an authored state.
        Neutral => "ntr",
        Speak => "spk",
        Sleep => "eyb",
        Sad => "sad",
        Smile => "sml",
        Angry => "agr",
        Surprised => "srp",
        SpeakLay => "lsp",
        SleepLay => "ley",
        SadLay => "lsa",
        SmileLay => "lsm",
        AngryLay => "lag",
        SurprisedLay => "lsr",
    }
}

impl AvatarState {
    pub fn is_action(self) -> bool {
        matches!(
            self,
            Self::Stand
                | Self::Walk
                | Self::Wave
                | Self::Lay
                | Self::BlowKiss
                | Self::Carry
                | Self::Drink
                | Self::Respect
                | Self::Sign
                | Self::Sit
        )
    }

    pub fn is_expression(self) -> bool {
        !self.is_action()
    }

    /// States tried after the action itself when its body assets are missing.
    pub fn action_fallbacks(self) -> &'static [AvatarState] {
        match self {
            Self::Walk | Self::Wave | Self::Sit | Self::Drink => &[Self::Stand],
            Self::Respect | Self::Carry | Self::Sign => &[Self::Wave, Self::Stand],
            Self::BlowKiss => &[Self::Drink, Self::Stand],
            Self::Stand => &[],
            _ => &[Self::Stand],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/figure/part.rs"]
mod tests;

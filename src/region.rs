//! AWS commercial regions.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Raised when a string is not a known region code.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("unknown region '{value}'")]
pub struct UnknownRegion {
    /// Code passed by the caller.
    pub value: String,
}

macro_rules! regions {
    ($($variant:ident => $code:literal),+ $(,)?) => {
        /// Region targeted by a transport.
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub enum AwsRegion {
            $(
                #[doc = concat!("`", $code, "`")]
                $variant,
            )+
        }

        impl AwsRegion {
            /// Every supported region.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Region code, for example `eu-west-1`.
            #[must_use]
            pub const fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }
        }
    };
}

regions! {
    UsEast1 => "us-east-1",
    UsEast2 => "us-east-2",
    UsWest1 => "us-west-1",
    UsWest2 => "us-west-2",
    AfSouth1 => "af-south-1",
    ApEast1 => "ap-east-1",
    ApSouth1 => "ap-south-1",
    ApNortheast1 => "ap-northeast-1",
    ApNortheast2 => "ap-northeast-2",
    ApNortheast3 => "ap-northeast-3",
    ApSoutheast1 => "ap-southeast-1",
    ApSoutheast2 => "ap-southeast-2",
    CaCentral1 => "ca-central-1",
    EuCentral1 => "eu-central-1",
    EuWest1 => "eu-west-1",
    EuWest2 => "eu-west-2",
    EuWest3 => "eu-west-3",
    EuNorth1 => "eu-north-1",
    EuSouth1 => "eu-south-1",
    MeSouth1 => "me-south-1",
    SaEast1 => "sa-east-1",
}

impl fmt::Display for AwsRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for AwsRegion {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|region| region.code() == s)
            .ok_or_else(|| UnknownRegion {
                value: s.to_owned(),
            })
    }
}

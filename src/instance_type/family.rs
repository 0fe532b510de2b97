//! Instance families and their fixed size-tier tables.
//!
//! Tier `n` of a family is entry `n - 1` of its table. Providers do not name
//! sizes uniformly across generations (`nano`, `9xlarge`, `metal`, ...), so
//! each table is kept verbatim.

use std::fmt;

/// Processor vendor for families offered on both Intel and AMD silicon.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Cpu {
    /// Intel Xeon.
    Intel,
    /// AMD EPYC (`a` suffix).
    Amd,
}

/// A group of instance types sharing a hardware generation and purpose.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Family {
    /// Previous-generation micro instance (`t1.micro`). Single tier.
    T1,
    /// Burstable T2, tiers 1 (`t2.nano`) to 7 (`t2.2xlarge`).
    T2,
    /// Burstable T3, tiers 1 (`nano`) to 7 (`2xlarge`).
    T3 {
        /// Intel (`t3`) or AMD (`t3a`).
        cpu: Cpu,
    },
    /// Current general purpose M5, tiers 1 (`large`) to 6 (`24xlarge`).
    GeneralPurpose {
        /// Selects `m5d` (local NVMe storage) instead of `m5`.
        local_nvme: bool,
    },
    /// Previous general purpose M4, tiers 1 (`large`) to 6 (`16xlarge`).
    GeneralPurposeOld,
    /// Memory optimised R4, tiers 1 (`large`) to 6 (`16xlarge`).
    HighMemory,
    /// Previous compute optimised C4, tiers 1 (`large`) to 5 (`8xlarge`).
    ComputeOld,
    /// Compute optimised C5, tiers 1 (`large`) to 6 (`18xlarge`).
    Compute {
        /// Selects `c5d` (local NVMe storage) instead of `c5`.
        local_nvme: bool,
    },
    /// Compute optimised C6, tiers 1 (`large`) to 10 (`metal`).
    ComputeC6 {
        /// Intel (`c6i`) or AMD (`c6a`).
        cpu: Cpu,
    },
    /// Storage optimised I2, tiers 1 (`xlarge`) to 4 (`8xlarge`).
    HighIo,
}

const T1: &[&str] = &["t1.micro"];

const T2: &[&str] = &[
    "t2.nano",
    "t2.micro",
    "t2.small",
    "t2.medium",
    "t2.large",
    "t2.xlarge",
    "t2.2xlarge",
];

const T3: &[&str] = &[
    "t3.nano",
    "t3.micro",
    "t3.small",
    "t3.medium",
    "t3.large",
    "t3.xlarge",
    "t3.2xlarge",
];

const T3A: &[&str] = &[
    "t3a.nano",
    "t3a.micro",
    "t3a.small",
    "t3a.medium",
    "t3a.large",
    "t3a.xlarge",
    "t3a.2xlarge",
];

const M5: &[&str] = &[
    "m5.large",
    "m5.xlarge",
    "m5.2xlarge",
    "m5.4xlarge",
    "m5.12xlarge",
    "m5.24xlarge",
];

const M5D: &[&str] = &[
    "m5d.large",
    "m5d.xlarge",
    "m5d.2xlarge",
    "m5d.4xlarge",
    "m5d.12xlarge",
    "m5d.24xlarge",
];

const M4: &[&str] = &[
    "m4.large",
    "m4.xlarge",
    "m4.2xlarge",
    "m4.4xlarge",
    "m4.10xlarge",
    "m4.16xlarge",
];

const R4: &[&str] = &[
    "r4.large",
    "r4.xlarge",
    "r4.2xlarge",
    "r4.4xlarge",
    "r4.8xlarge",
    "r4.16xlarge",
];

const C4: &[&str] = &[
    "c4.large",
    "c4.xlarge",
    "c4.2xlarge",
    "c4.4xlarge",
    "c4.8xlarge",
];

// Non-NVMe compute resolves here, not to the c4 table older catalogs used.
const C5: &[&str] = &[
    "c5.large",
    "c5.xlarge",
    "c5.2xlarge",
    "c5.4xlarge",
    "c5.9xlarge",
    "c5.18xlarge",
];

const C5D: &[&str] = &[
    "c5d.large",
    "c5d.xlarge",
    "c5d.2xlarge",
    "c5d.4xlarge",
    "c5d.9xlarge",
    "c5d.18xlarge",
];

const C6I: &[&str] = &[
    "c6i.large",
    "c6i.xlarge",
    "c6i.2xlarge",
    "c6i.4xlarge",
    "c6i.8xlarge",
    "c6i.12xlarge",
    "c6i.16xlarge",
    "c6i.24xlarge",
    "c6i.32xlarge",
    "c6i.metal",
];

// c6a.48xlarge exists but is not a tier; tier 10 is the metal host.
const C6A: &[&str] = &[
    "c6a.large",
    "c6a.xlarge",
    "c6a.2xlarge",
    "c6a.4xlarge",
    "c6a.8xlarge",
    "c6a.12xlarge",
    "c6a.16xlarge",
    "c6a.24xlarge",
    "c6a.32xlarge",
    "c6a.metal",
];

const I2: &[&str] = &["i2.xlarge", "i2.2xlarge", "i2.4xlarge", "i2.8xlarge"];

impl Family {
    /// Every family and variant combination, in catalog order.
    pub const ALL: [Self; 14] = [
        Self::T1,
        Self::T2,
        Self::T3 { cpu: Cpu::Intel },
        Self::T3 { cpu: Cpu::Amd },
        Self::GeneralPurpose { local_nvme: false },
        Self::GeneralPurpose { local_nvme: true },
        Self::GeneralPurposeOld,
        Self::HighMemory,
        Self::ComputeOld,
        Self::Compute { local_nvme: false },
        Self::Compute { local_nvme: true },
        Self::ComputeC6 { cpu: Cpu::Intel },
        Self::ComputeC6 { cpu: Cpu::Amd },
        Self::HighIo,
    ];

    /// Returns the tier table, smallest size first.
    #[must_use]
    pub const fn tiers(self) -> &'static [&'static str] {
        match self {
            Self::T1 => T1,
            Self::T2 => T2,
            Self::T3 { cpu: Cpu::Intel } => T3,
            Self::T3 { cpu: Cpu::Amd } => T3A,
            Self::GeneralPurpose { local_nvme: false } => M5,
            Self::GeneralPurpose { local_nvme: true } => M5D,
            Self::GeneralPurposeOld => M4,
            Self::HighMemory => R4,
            Self::ComputeOld => C4,
            Self::Compute { local_nvme: false } => C5,
            Self::Compute { local_nvme: true } => C5D,
            Self::ComputeC6 { cpu: Cpu::Intel } => C6I,
            Self::ComputeC6 { cpu: Cpu::Amd } => C6A,
            Self::HighIo => I2,
        }
    }

    /// Largest supported tier. The smallest is always 1.
    #[must_use]
    pub fn max_tier(self) -> u32 {
        u32::try_from(self.tiers().len()).unwrap_or(u32::MAX)
    }

    /// Identifier prefix shared by every type in the family (`t3a`, `m5d`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::T1 => "t1",
            Self::T2 => "t2",
            Self::T3 { cpu: Cpu::Intel } => "t3",
            Self::T3 { cpu: Cpu::Amd } => "t3a",
            Self::GeneralPurpose { local_nvme: false } => "m5",
            Self::GeneralPurpose { local_nvme: true } => "m5d",
            Self::GeneralPurposeOld => "m4",
            Self::HighMemory => "r4",
            Self::ComputeOld => "c4",
            Self::Compute { local_nvme: false } => "c5",
            Self::Compute { local_nvme: true } => "c5d",
            Self::ComputeC6 { cpu: Cpu::Intel } => "c6i",
            Self::ComputeC6 { cpu: Cpu::Amd } => "c6a",
            Self::HighIo => "i2",
        }
    }

    /// Returns the identifier for `tier`, or `None` outside `1..=max_tier`.
    pub(super) fn identifier(self, tier: u32) -> Option<&'static str> {
        let index = usize::try_from(tier).ok()?.checked_sub(1)?;
        self.tiers().get(index).copied()
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

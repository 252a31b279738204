//! RISC-V register descriptors.
//!
//! One table serves RV64 and RV32. Register widths are recorded relative to XLEN and
//! resolved per family when a layout is requested. Each record also carries its numeric
//! alias (`X1` for `RA`) and, for CSRs, the CSR address.

use std::borrow::Cow;
use std::sync::LazyLock;

use serde::Deserialize;

use crate::availability::{Availability, Variants};
use crate::isa::{Descriptor, Family, Isa, Layout, RegisterKind};
use crate::table::DescriptorTable;

/// Register width as a function of the family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Width {
    /// As wide as the family's XLEN.
    Xlen,
    /// A fixed number of bits regardless of XLEN.
    Bits(u32),
}

impl Width {
    /// Width in bits for `family`.
    pub const fn resolve(self, family: Family) -> u32 {
        match self {
            Self::Xlen => family.native_width(),
            Self::Bits(bits) => bits,
        }
    }
}

/// RISC-V descriptor record.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RiscvDescriptor {
    /// Numeric spelling (`X5`, `F10`); equal to `name` for the PC and CSRs.
    pub alias: Cow<'static, str>,
    /// Canonical upper-case ABI name (the namespace key).
    pub name: Cow<'static, str>,
    /// Lower-case spelling used by disassemblers.
    pub lower_name: Cow<'static, str>,
    /// Register width.
    pub width: Width,
    /// Enclosing register.
    pub parent: Cow<'static, str>,
    /// Whether writes are architecturally permitted.
    pub mutable: bool,
    /// CSR address for system records.
    #[serde(default)]
    pub csr: Option<u16>,
    /// Table section.
    #[serde(default)]
    pub kind: RegisterKind,
}

impl RiscvDescriptor {
    /// XLEN-wide integer register record.
    pub const fn integer(
        alias: &'static str,
        name: &'static str,
        lower_name: &'static str,
        mutable: bool,
    ) -> Self {
        Self {
            alias: Cow::Borrowed(alias),
            name: Cow::Borrowed(name),
            lower_name: Cow::Borrowed(lower_name),
            width: Width::Xlen,
            parent: Cow::Borrowed(name),
            mutable,
            csr: None,
            kind: RegisterKind::Architectural,
        }
    }

    /// Double-precision floating-point register record.
    pub const fn float(alias: &'static str, name: &'static str, lower_name: &'static str) -> Self {
        Self {
            alias: Cow::Borrowed(alias),
            name: Cow::Borrowed(name),
            lower_name: Cow::Borrowed(lower_name),
            width: Width::Bits(64),
            parent: Cow::Borrowed(name),
            mutable: true,
            csr: None,
            kind: RegisterKind::Architectural,
        }
    }

    /// CSR record.
    pub const fn csr(
        name: &'static str,
        lower_name: &'static str,
        address: u16,
        mutable: bool,
    ) -> Self {
        Self {
            alias: Cow::Borrowed(name),
            name: Cow::Borrowed(name),
            lower_name: Cow::Borrowed(lower_name),
            width: Width::Xlen,
            parent: Cow::Borrowed(name),
            mutable,
            csr: Some(address),
            kind: RegisterKind::System,
        }
    }
}

impl Descriptor for RiscvDescriptor {
    const ISA: Isa = Isa::Riscv;

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> RegisterKind {
        self.kind
    }

    fn availability(&self) -> Availability {
        Availability::only(Variants::RV64.union(Variants::RV32))
    }

    fn layout(&self, family: Family) -> Layout {
        Layout {
            upper: self.width.resolve(family).saturating_sub(1),
            lower: 0,
            parent: self.parent.clone(),
        }
    }

    fn is_mutable(&self) -> bool {
        self.mutable
    }

    fn missing_field(&self) -> Option<&'static str> {
        if self.alias.is_empty() {
            Some("alias")
        } else if self.name.is_empty() {
            Some("name")
        } else if self.lower_name.is_empty() {
            Some("lower_name")
        } else if self.parent.is_empty() {
            Some("parent")
        } else if self.kind == RegisterKind::System && self.csr.is_none() {
            Some("csr")
        } else {
            None
        }
    }
}

/// The built-in RISC-V table.
pub fn table() -> &'static DescriptorTable<RiscvDescriptor> {
    static TABLE: LazyLock<DescriptorTable<RiscvDescriptor>> = LazyLock::new(|| {
        DescriptorTable::from_sections(&[&REGISTERS[..], &SYSTEM_REGISTERS[..]])
    });
    &TABLE
}

/// Integer registers (ABI names), the program counter and floating-point registers.
pub static REGISTERS: [RiscvDescriptor; 65] = [
    RiscvDescriptor::integer("X0", "ZERO", "zero", false),
    RiscvDescriptor::integer("X1", "RA", "ra", true),
    RiscvDescriptor::integer("X2", "SP", "sp", true),
    RiscvDescriptor::integer("X3", "GP", "gp", true),
    RiscvDescriptor::integer("X4", "TP", "tp", true),
    RiscvDescriptor::integer("X5", "T0", "t0", true),
    RiscvDescriptor::integer("X6", "T1", "t1", true),
    RiscvDescriptor::integer("X7", "T2", "t2", true),
    RiscvDescriptor::integer("X8", "S0", "s0", true),
    RiscvDescriptor::integer("X9", "S1", "s1", true),
    RiscvDescriptor::integer("X10", "A0", "a0", true),
    RiscvDescriptor::integer("X11", "A1", "a1", true),
    RiscvDescriptor::integer("X12", "A2", "a2", true),
    RiscvDescriptor::integer("X13", "A3", "a3", true),
    RiscvDescriptor::integer("X14", "A4", "a4", true),
    RiscvDescriptor::integer("X15", "A5", "a5", true),
    RiscvDescriptor::integer("X16", "A6", "a6", true),
    RiscvDescriptor::integer("X17", "A7", "a7", true),
    RiscvDescriptor::integer("X18", "S2", "s2", true),
    RiscvDescriptor::integer("X19", "S3", "s3", true),
    RiscvDescriptor::integer("X20", "S4", "s4", true),
    RiscvDescriptor::integer("X21", "S5", "s5", true),
    RiscvDescriptor::integer("X22", "S6", "s6", true),
    RiscvDescriptor::integer("X23", "S7", "s7", true),
    RiscvDescriptor::integer("X24", "S8", "s8", true),
    RiscvDescriptor::integer("X25", "S9", "s9", true),
    RiscvDescriptor::integer("X26", "S10", "s10", true),
    RiscvDescriptor::integer("X27", "S11", "s11", true),
    RiscvDescriptor::integer("X28", "T3", "t3", true),
    RiscvDescriptor::integer("X29", "T4", "t4", true),
    RiscvDescriptor::integer("X30", "T5", "t5", true),
    RiscvDescriptor::integer("X31", "T6", "t6", true),
    RiscvDescriptor::integer("PC", "PC", "pc", true),
    RiscvDescriptor::float("F0", "FT0", "ft0"),
    RiscvDescriptor::float("F1", "FT1", "ft1"),
    RiscvDescriptor::float("F2", "FT2", "ft2"),
    RiscvDescriptor::float("F3", "FT3", "ft3"),
    RiscvDescriptor::float("F4", "FT4", "ft4"),
    RiscvDescriptor::float("F5", "FT5", "ft5"),
    RiscvDescriptor::float("F6", "FT6", "ft6"),
    RiscvDescriptor::float("F7", "FT7", "ft7"),
    RiscvDescriptor::float("F8", "FS0", "fs0"),
    RiscvDescriptor::float("F9", "FS1", "fs1"),
    RiscvDescriptor::float("F10", "FA0", "fa0"),
    RiscvDescriptor::float("F11", "FA1", "fa1"),
    RiscvDescriptor::float("F12", "FA2", "fa2"),
    RiscvDescriptor::float("F13", "FA3", "fa3"),
    RiscvDescriptor::float("F14", "FA4", "fa4"),
    RiscvDescriptor::float("F15", "FA5", "fa5"),
    RiscvDescriptor::float("F16", "FA6", "fa6"),
    RiscvDescriptor::float("F17", "FA7", "fa7"),
    RiscvDescriptor::float("F18", "FS2", "fs2"),
    RiscvDescriptor::float("F19", "FS3", "fs3"),
    RiscvDescriptor::float("F20", "FS4", "fs4"),
    RiscvDescriptor::float("F21", "FS5", "fs5"),
    RiscvDescriptor::float("F22", "FS6", "fs6"),
    RiscvDescriptor::float("F23", "FS7", "fs7"),
    RiscvDescriptor::float("F24", "FS8", "fs8"),
    RiscvDescriptor::float("F25", "FS9", "fs9"),
    RiscvDescriptor::float("F26", "FS10", "fs10"),
    RiscvDescriptor::float("F27", "FS11", "fs11"),
    RiscvDescriptor::float("F28", "FT8", "ft8"),
    RiscvDescriptor::float("F29", "FT9", "ft9"),
    RiscvDescriptor::float("F30", "FT10", "ft10"),
    RiscvDescriptor::float("F31", "FT11", "ft11"),
];

/// Control and status registers.
pub static SYSTEM_REGISTERS: [RiscvDescriptor; 35] = [
    RiscvDescriptor::csr("FFLAGS", "fflags", 0x001, true),
    RiscvDescriptor::csr("FRM", "frm", 0x002, true),
    RiscvDescriptor::csr("FCSR", "fcsr", 0x003, true),
    RiscvDescriptor::csr("SSTATUS", "sstatus", 0x100, true),
    RiscvDescriptor::csr("SIE", "sie", 0x104, true),
    RiscvDescriptor::csr("STVEC", "stvec", 0x105, true),
    RiscvDescriptor::csr("SCOUNTEREN", "scounteren", 0x106, true),
    RiscvDescriptor::csr("SSCRATCH", "sscratch", 0x140, true),
    RiscvDescriptor::csr("SEPC", "sepc", 0x141, true),
    RiscvDescriptor::csr("SCAUSE", "scause", 0x142, true),
    RiscvDescriptor::csr("STVAL", "stval", 0x143, true),
    RiscvDescriptor::csr("SIP", "sip", 0x144, true),
    RiscvDescriptor::csr("STIMECMP", "stimecmp", 0x14D, true),
    RiscvDescriptor::csr("SATP", "satp", 0x180, true),
    RiscvDescriptor::csr("MSTATUS", "mstatus", 0x300, true),
    RiscvDescriptor::csr("MISA", "misa", 0x301, true),
    RiscvDescriptor::csr("MEDELEG", "medeleg", 0x302, true),
    RiscvDescriptor::csr("MIDELEG", "mideleg", 0x303, true),
    RiscvDescriptor::csr("MIE", "mie", 0x304, true),
    RiscvDescriptor::csr("MTVEC", "mtvec", 0x305, true),
    RiscvDescriptor::csr("MCOUNTEREN", "mcounteren", 0x306, true),
    RiscvDescriptor::csr("MSCRATCH", "mscratch", 0x340, true),
    RiscvDescriptor::csr("MEPC", "mepc", 0x341, true),
    RiscvDescriptor::csr("MCAUSE", "mcause", 0x342, true),
    RiscvDescriptor::csr("MTVAL", "mtval", 0x343, true),
    RiscvDescriptor::csr("MIP", "mip", 0x344, true),
    RiscvDescriptor::csr("MCYCLE", "mcycle", 0xB00, true),
    RiscvDescriptor::csr("MINSTRET", "minstret", 0xB02, true),
    RiscvDescriptor::csr("CYCLE", "cycle", 0xC00, false),
    RiscvDescriptor::csr("TIME", "time", 0xC01, false),
    RiscvDescriptor::csr("INSTRET", "instret", 0xC02, false),
    RiscvDescriptor::csr("MVENDORID", "mvendorid", 0xF11, false),
    RiscvDescriptor::csr("MARCHID", "marchid", 0xF12, false),
    RiscvDescriptor::csr("MIMPID", "mimpid", 0xF13, false),
    RiscvDescriptor::csr("MHARTID", "mhartid", 0xF14, false),
];

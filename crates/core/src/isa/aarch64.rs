//! AArch64 register descriptors.
//!
//! The table has three sections merged in order: general-purpose and vector registers,
//! the individual condition flags, and system registers. System records additionally
//! carry their `MRS`/`MSR` operand encoding.

use std::borrow::Cow;
use std::sync::LazyLock;

use serde::Deserialize;

use crate::availability::{Availability, Variants};
use crate::isa::{Descriptor, Family, Isa, Layout, RegisterKind};
use crate::table::DescriptorTable;

/// Packs a system register operand `S<op0>_<op1>_C<n>_C<m>_<op2>` into its 16-bit form.
pub const fn sysreg(op0: u16, op1: u16, crn: u16, crm: u16, op2: u16) -> u16 {
    (op0 << 14) | (op1 << 11) | (crn << 7) | (crm << 3) | op2
}

/// AArch64 descriptor record.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Aarch64Descriptor {
    /// Canonical upper-case name.
    pub name: Cow<'static, str>,
    /// Lower-case spelling used by disassemblers.
    pub lower_name: Cow<'static, str>,
    /// Bit range inside the parent register.
    pub layout: Layout,
    /// Whether writes are architecturally permitted.
    #[serde(default = "Aarch64Descriptor::default_mutable")]
    pub mutable: bool,
    /// Packed system register operand, present for system records only.
    #[serde(default)]
    pub encoding: Option<u16>,
    /// Table section.
    #[serde(default)]
    pub kind: RegisterKind,
}

impl Aarch64Descriptor {
    const fn default_mutable() -> bool {
        true
    }

    /// General-purpose or vector register record.
    pub const fn new(
        name: &'static str,
        lower_name: &'static str,
        span: (u32, u32, &'static str),
        mutable: bool,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            lower_name: Cow::Borrowed(lower_name),
            layout: Layout::new(span.0, span.1, span.2),
            mutable,
            encoding: None,
            kind: RegisterKind::Architectural,
        }
    }

    /// Condition flag record.
    pub const fn pseudo(
        name: &'static str,
        lower_name: &'static str,
        span: (u32, u32, &'static str),
        mutable: bool,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            lower_name: Cow::Borrowed(lower_name),
            layout: Layout::new(span.0, span.1, span.2),
            mutable,
            encoding: None,
            kind: RegisterKind::Pseudo,
        }
    }

    /// Full-width system register record.
    pub const fn system(
        name: &'static str,
        lower_name: &'static str,
        encoding: u16,
        mutable: bool,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            lower_name: Cow::Borrowed(lower_name),
            layout: Layout::new(63, 0, name),
            mutable,
            encoding: Some(encoding),
            kind: RegisterKind::System,
        }
    }
}

impl Descriptor for Aarch64Descriptor {
    const ISA: Isa = Isa::Aarch64;

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> RegisterKind {
        self.kind
    }

    fn availability(&self) -> Availability {
        Availability::only(Variants::AARCH64)
    }

    fn layout(&self, _family: Family) -> Layout {
        self.layout.clone()
    }

    fn is_mutable(&self) -> bool {
        self.mutable
    }

    fn missing_field(&self) -> Option<&'static str> {
        if self.name.is_empty() {
            Some("name")
        } else if self.lower_name.is_empty() {
            Some("lower_name")
        } else if self.layout.parent.is_empty() {
            Some("layout.parent")
        } else if self.kind == RegisterKind::System && self.encoding.is_none() {
            Some("encoding")
        } else {
            None
        }
    }
}

/// The built-in AArch64 table.
pub fn table() -> &'static DescriptorTable<Aarch64Descriptor> {
    static TABLE: LazyLock<DescriptorTable<Aarch64Descriptor>> = LazyLock::new(|| {
        DescriptorTable::from_sections(&[
            &REGISTERS[..],
            &PSEUDO_REGISTERS[..],
            &SYSTEM_REGISTERS[..],
        ])
    });
    &TABLE
}

/// General-purpose, SIMD and floating-point registers.
pub static REGISTERS: [Aarch64Descriptor; 260] = [
    Aarch64Descriptor::new("X0", "x0", (63, 0, "X0"), true),
    Aarch64Descriptor::new("X1", "x1", (63, 0, "X1"), true),
    Aarch64Descriptor::new("X2", "x2", (63, 0, "X2"), true),
    Aarch64Descriptor::new("X3", "x3", (63, 0, "X3"), true),
    Aarch64Descriptor::new("X4", "x4", (63, 0, "X4"), true),
    Aarch64Descriptor::new("X5", "x5", (63, 0, "X5"), true),
    Aarch64Descriptor::new("X6", "x6", (63, 0, "X6"), true),
    Aarch64Descriptor::new("X7", "x7", (63, 0, "X7"), true),
    Aarch64Descriptor::new("X8", "x8", (63, 0, "X8"), true),
    Aarch64Descriptor::new("X9", "x9", (63, 0, "X9"), true),
    Aarch64Descriptor::new("X10", "x10", (63, 0, "X10"), true),
    Aarch64Descriptor::new("X11", "x11", (63, 0, "X11"), true),
    Aarch64Descriptor::new("X12", "x12", (63, 0, "X12"), true),
    Aarch64Descriptor::new("X13", "x13", (63, 0, "X13"), true),
    Aarch64Descriptor::new("X14", "x14", (63, 0, "X14"), true),
    Aarch64Descriptor::new("X15", "x15", (63, 0, "X15"), true),
    Aarch64Descriptor::new("X16", "x16", (63, 0, "X16"), true),
    Aarch64Descriptor::new("X17", "x17", (63, 0, "X17"), true),
    Aarch64Descriptor::new("X18", "x18", (63, 0, "X18"), true),
    Aarch64Descriptor::new("X19", "x19", (63, 0, "X19"), true),
    Aarch64Descriptor::new("X20", "x20", (63, 0, "X20"), true),
    Aarch64Descriptor::new("X21", "x21", (63, 0, "X21"), true),
    Aarch64Descriptor::new("X22", "x22", (63, 0, "X22"), true),
    Aarch64Descriptor::new("X23", "x23", (63, 0, "X23"), true),
    Aarch64Descriptor::new("X24", "x24", (63, 0, "X24"), true),
    Aarch64Descriptor::new("X25", "x25", (63, 0, "X25"), true),
    Aarch64Descriptor::new("X26", "x26", (63, 0, "X26"), true),
    Aarch64Descriptor::new("X27", "x27", (63, 0, "X27"), true),
    Aarch64Descriptor::new("X28", "x28", (63, 0, "X28"), true),
    Aarch64Descriptor::new("X29", "x29", (63, 0, "X29"), true),
    Aarch64Descriptor::new("X30", "x30", (63, 0, "X30"), true),
    Aarch64Descriptor::new("SP", "sp", (63, 0, "SP"), true),
    Aarch64Descriptor::new("PC", "pc", (63, 0, "PC"), true),
    Aarch64Descriptor::new("XZR", "xzr", (63, 0, "XZR"), false),
    Aarch64Descriptor::new("W0", "w0", (31, 0, "X0"), true),
    Aarch64Descriptor::new("W1", "w1", (31, 0, "X1"), true),
    Aarch64Descriptor::new("W2", "w2", (31, 0, "X2"), true),
    Aarch64Descriptor::new("W3", "w3", (31, 0, "X3"), true),
    Aarch64Descriptor::new("W4", "w4", (31, 0, "X4"), true),
    Aarch64Descriptor::new("W5", "w5", (31, 0, "X5"), true),
    Aarch64Descriptor::new("W6", "w6", (31, 0, "X6"), true),
    Aarch64Descriptor::new("W7", "w7", (31, 0, "X7"), true),
    Aarch64Descriptor::new("W8", "w8", (31, 0, "X8"), true),
    Aarch64Descriptor::new("W9", "w9", (31, 0, "X9"), true),
    Aarch64Descriptor::new("W10", "w10", (31, 0, "X10"), true),
    Aarch64Descriptor::new("W11", "w11", (31, 0, "X11"), true),
    Aarch64Descriptor::new("W12", "w12", (31, 0, "X12"), true),
    Aarch64Descriptor::new("W13", "w13", (31, 0, "X13"), true),
    Aarch64Descriptor::new("W14", "w14", (31, 0, "X14"), true),
    Aarch64Descriptor::new("W15", "w15", (31, 0, "X15"), true),
    Aarch64Descriptor::new("W16", "w16", (31, 0, "X16"), true),
    Aarch64Descriptor::new("W17", "w17", (31, 0, "X17"), true),
    Aarch64Descriptor::new("W18", "w18", (31, 0, "X18"), true),
    Aarch64Descriptor::new("W19", "w19", (31, 0, "X19"), true),
    Aarch64Descriptor::new("W20", "w20", (31, 0, "X20"), true),
    Aarch64Descriptor::new("W21", "w21", (31, 0, "X21"), true),
    Aarch64Descriptor::new("W22", "w22", (31, 0, "X22"), true),
    Aarch64Descriptor::new("W23", "w23", (31, 0, "X23"), true),
    Aarch64Descriptor::new("W24", "w24", (31, 0, "X24"), true),
    Aarch64Descriptor::new("W25", "w25", (31, 0, "X25"), true),
    Aarch64Descriptor::new("W26", "w26", (31, 0, "X26"), true),
    Aarch64Descriptor::new("W27", "w27", (31, 0, "X27"), true),
    Aarch64Descriptor::new("W28", "w28", (31, 0, "X28"), true),
    Aarch64Descriptor::new("W29", "w29", (31, 0, "X29"), true),
    Aarch64Descriptor::new("W30", "w30", (31, 0, "X30"), true),
    Aarch64Descriptor::new("WSP", "wsp", (31, 0, "SP"), true),
    Aarch64Descriptor::new("WZR", "wzr", (31, 0, "XZR"), false),
    Aarch64Descriptor::new("SPSR", "spsr", (31, 0, "SPSR"), true),
    Aarch64Descriptor::new("Q0", "q0", (127, 0, "Q0"), true),
    Aarch64Descriptor::new("Q1", "q1", (127, 0, "Q1"), true),
    Aarch64Descriptor::new("Q2", "q2", (127, 0, "Q2"), true),
    Aarch64Descriptor::new("Q3", "q3", (127, 0, "Q3"), true),
    Aarch64Descriptor::new("Q4", "q4", (127, 0, "Q4"), true),
    Aarch64Descriptor::new("Q5", "q5", (127, 0, "Q5"), true),
    Aarch64Descriptor::new("Q6", "q6", (127, 0, "Q6"), true),
    Aarch64Descriptor::new("Q7", "q7", (127, 0, "Q7"), true),
    Aarch64Descriptor::new("Q8", "q8", (127, 0, "Q8"), true),
    Aarch64Descriptor::new("Q9", "q9", (127, 0, "Q9"), true),
    Aarch64Descriptor::new("Q10", "q10", (127, 0, "Q10"), true),
    Aarch64Descriptor::new("Q11", "q11", (127, 0, "Q11"), true),
    Aarch64Descriptor::new("Q12", "q12", (127, 0, "Q12"), true),
    Aarch64Descriptor::new("Q13", "q13", (127, 0, "Q13"), true),
    Aarch64Descriptor::new("Q14", "q14", (127, 0, "Q14"), true),
    Aarch64Descriptor::new("Q15", "q15", (127, 0, "Q15"), true),
    Aarch64Descriptor::new("Q16", "q16", (127, 0, "Q16"), true),
    Aarch64Descriptor::new("Q17", "q17", (127, 0, "Q17"), true),
    Aarch64Descriptor::new("Q18", "q18", (127, 0, "Q18"), true),
    Aarch64Descriptor::new("Q19", "q19", (127, 0, "Q19"), true),
    Aarch64Descriptor::new("Q20", "q20", (127, 0, "Q20"), true),
    Aarch64Descriptor::new("Q21", "q21", (127, 0, "Q21"), true),
    Aarch64Descriptor::new("Q22", "q22", (127, 0, "Q22"), true),
    Aarch64Descriptor::new("Q23", "q23", (127, 0, "Q23"), true),
    Aarch64Descriptor::new("Q24", "q24", (127, 0, "Q24"), true),
    Aarch64Descriptor::new("Q25", "q25", (127, 0, "Q25"), true),
    Aarch64Descriptor::new("Q26", "q26", (127, 0, "Q26"), true),
    Aarch64Descriptor::new("Q27", "q27", (127, 0, "Q27"), true),
    Aarch64Descriptor::new("Q28", "q28", (127, 0, "Q28"), true),
    Aarch64Descriptor::new("Q29", "q29", (127, 0, "Q29"), true),
    Aarch64Descriptor::new("Q30", "q30", (127, 0, "Q30"), true),
    Aarch64Descriptor::new("Q31", "q31", (127, 0, "Q31"), true),
    Aarch64Descriptor::new("D0", "d0", (63, 0, "Q0"), true),
    Aarch64Descriptor::new("D1", "d1", (63, 0, "Q1"), true),
    Aarch64Descriptor::new("D2", "d2", (63, 0, "Q2"), true),
    Aarch64Descriptor::new("D3", "d3", (63, 0, "Q3"), true),
    Aarch64Descriptor::new("D4", "d4", (63, 0, "Q4"), true),
    Aarch64Descriptor::new("D5", "d5", (63, 0, "Q5"), true),
    Aarch64Descriptor::new("D6", "d6", (63, 0, "Q6"), true),
    Aarch64Descriptor::new("D7", "d7", (63, 0, "Q7"), true),
    Aarch64Descriptor::new("D8", "d8", (63, 0, "Q8"), true),
    Aarch64Descriptor::new("D9", "d9", (63, 0, "Q9"), true),
    Aarch64Descriptor::new("D10", "d10", (63, 0, "Q10"), true),
    Aarch64Descriptor::new("D11", "d11", (63, 0, "Q11"), true),
    Aarch64Descriptor::new("D12", "d12", (63, 0, "Q12"), true),
    Aarch64Descriptor::new("D13", "d13", (63, 0, "Q13"), true),
    Aarch64Descriptor::new("D14", "d14", (63, 0, "Q14"), true),
    Aarch64Descriptor::new("D15", "d15", (63, 0, "Q15"), true),
    Aarch64Descriptor::new("D16", "d16", (63, 0, "Q16"), true),
    Aarch64Descriptor::new("D17", "d17", (63, 0, "Q17"), true),
    Aarch64Descriptor::new("D18", "d18", (63, 0, "Q18"), true),
    Aarch64Descriptor::new("D19", "d19", (63, 0, "Q19"), true),
    Aarch64Descriptor::new("D20", "d20", (63, 0, "Q20"), true),
    Aarch64Descriptor::new("D21", "d21", (63, 0, "Q21"), true),
    Aarch64Descriptor::new("D22", "d22", (63, 0, "Q22"), true),
    Aarch64Descriptor::new("D23", "d23", (63, 0, "Q23"), true),
    Aarch64Descriptor::new("D24", "d24", (63, 0, "Q24"), true),
    Aarch64Descriptor::new("D25", "d25", (63, 0, "Q25"), true),
    Aarch64Descriptor::new("D26", "d26", (63, 0, "Q26"), true),
    Aarch64Descriptor::new("D27", "d27", (63, 0, "Q27"), true),
    Aarch64Descriptor::new("D28", "d28", (63, 0, "Q28"), true),
    Aarch64Descriptor::new("D29", "d29", (63, 0, "Q29"), true),
    Aarch64Descriptor::new("D30", "d30", (63, 0, "Q30"), true),
    Aarch64Descriptor::new("D31", "d31", (63, 0, "Q31"), true),
    Aarch64Descriptor::new("S0", "s0", (31, 0, "Q0"), true),
    Aarch64Descriptor::new("S1", "s1", (31, 0, "Q1"), true),
    Aarch64Descriptor::new("S2", "s2", (31, 0, "Q2"), true),
    Aarch64Descriptor::new("S3", "s3", (31, 0, "Q3"), true),
    Aarch64Descriptor::new("S4", "s4", (31, 0, "Q4"), true),
    Aarch64Descriptor::new("S5", "s5", (31, 0, "Q5"), true),
    Aarch64Descriptor::new("S6", "s6", (31, 0, "Q6"), true),
    Aarch64Descriptor::new("S7", "s7", (31, 0, "Q7"), true),
    Aarch64Descriptor::new("S8", "s8", (31, 0, "Q8"), true),
    Aarch64Descriptor::new("S9", "s9", (31, 0, "Q9"), true),
    Aarch64Descriptor::new("S10", "s10", (31, 0, "Q10"), true),
    Aarch64Descriptor::new("S11", "s11", (31, 0, "Q11"), true),
    Aarch64Descriptor::new("S12", "s12", (31, 0, "Q12"), true),
    Aarch64Descriptor::new("S13", "s13", (31, 0, "Q13"), true),
    Aarch64Descriptor::new("S14", "s14", (31, 0, "Q14"), true),
    Aarch64Descriptor::new("S15", "s15", (31, 0, "Q15"), true),
    Aarch64Descriptor::new("S16", "s16", (31, 0, "Q16"), true),
    Aarch64Descriptor::new("S17", "s17", (31, 0, "Q17"), true),
    Aarch64Descriptor::new("S18", "s18", (31, 0, "Q18"), true),
    Aarch64Descriptor::new("S19", "s19", (31, 0, "Q19"), true),
    Aarch64Descriptor::new("S20", "s20", (31, 0, "Q20"), true),
    Aarch64Descriptor::new("S21", "s21", (31, 0, "Q21"), true),
    Aarch64Descriptor::new("S22", "s22", (31, 0, "Q22"), true),
    Aarch64Descriptor::new("S23", "s23", (31, 0, "Q23"), true),
    Aarch64Descriptor::new("S24", "s24", (31, 0, "Q24"), true),
    Aarch64Descriptor::new("S25", "s25", (31, 0, "Q25"), true),
    Aarch64Descriptor::new("S26", "s26", (31, 0, "Q26"), true),
    Aarch64Descriptor::new("S27", "s27", (31, 0, "Q27"), true),
    Aarch64Descriptor::new("S28", "s28", (31, 0, "Q28"), true),
    Aarch64Descriptor::new("S29", "s29", (31, 0, "Q29"), true),
    Aarch64Descriptor::new("S30", "s30", (31, 0, "Q30"), true),
    Aarch64Descriptor::new("S31", "s31", (31, 0, "Q31"), true),
    Aarch64Descriptor::new("H0", "h0", (15, 0, "Q0"), true),
    Aarch64Descriptor::new("H1", "h1", (15, 0, "Q1"), true),
    Aarch64Descriptor::new("H2", "h2", (15, 0, "Q2"), true),
    Aarch64Descriptor::new("H3", "h3", (15, 0, "Q3"), true),
    Aarch64Descriptor::new("H4", "h4", (15, 0, "Q4"), true),
    Aarch64Descriptor::new("H5", "h5", (15, 0, "Q5"), true),
    Aarch64Descriptor::new("H6", "h6", (15, 0, "Q6"), true),
    Aarch64Descriptor::new("H7", "h7", (15, 0, "Q7"), true),
    Aarch64Descriptor::new("H8", "h8", (15, 0, "Q8"), true),
    Aarch64Descriptor::new("H9", "h9", (15, 0, "Q9"), true),
    Aarch64Descriptor::new("H10", "h10", (15, 0, "Q10"), true),
    Aarch64Descriptor::new("H11", "h11", (15, 0, "Q11"), true),
    Aarch64Descriptor::new("H12", "h12", (15, 0, "Q12"), true),
    Aarch64Descriptor::new("H13", "h13", (15, 0, "Q13"), true),
    Aarch64Descriptor::new("H14", "h14", (15, 0, "Q14"), true),
    Aarch64Descriptor::new("H15", "h15", (15, 0, "Q15"), true),
    Aarch64Descriptor::new("H16", "h16", (15, 0, "Q16"), true),
    Aarch64Descriptor::new("H17", "h17", (15, 0, "Q17"), true),
    Aarch64Descriptor::new("H18", "h18", (15, 0, "Q18"), true),
    Aarch64Descriptor::new("H19", "h19", (15, 0, "Q19"), true),
    Aarch64Descriptor::new("H20", "h20", (15, 0, "Q20"), true),
    Aarch64Descriptor::new("H21", "h21", (15, 0, "Q21"), true),
    Aarch64Descriptor::new("H22", "h22", (15, 0, "Q22"), true),
    Aarch64Descriptor::new("H23", "h23", (15, 0, "Q23"), true),
    Aarch64Descriptor::new("H24", "h24", (15, 0, "Q24"), true),
    Aarch64Descriptor::new("H25", "h25", (15, 0, "Q25"), true),
    Aarch64Descriptor::new("H26", "h26", (15, 0, "Q26"), true),
    Aarch64Descriptor::new("H27", "h27", (15, 0, "Q27"), true),
    Aarch64Descriptor::new("H28", "h28", (15, 0, "Q28"), true),
    Aarch64Descriptor::new("H29", "h29", (15, 0, "Q29"), true),
    Aarch64Descriptor::new("H30", "h30", (15, 0, "Q30"), true),
    Aarch64Descriptor::new("H31", "h31", (15, 0, "Q31"), true),
    Aarch64Descriptor::new("B0", "b0", (7, 0, "Q0"), true),
    Aarch64Descriptor::new("B1", "b1", (7, 0, "Q1"), true),
    Aarch64Descriptor::new("B2", "b2", (7, 0, "Q2"), true),
    Aarch64Descriptor::new("B3", "b3", (7, 0, "Q3"), true),
    Aarch64Descriptor::new("B4", "b4", (7, 0, "Q4"), true),
    Aarch64Descriptor::new("B5", "b5", (7, 0, "Q5"), true),
    Aarch64Descriptor::new("B6", "b6", (7, 0, "Q6"), true),
    Aarch64Descriptor::new("B7", "b7", (7, 0, "Q7"), true),
    Aarch64Descriptor::new("B8", "b8", (7, 0, "Q8"), true),
    Aarch64Descriptor::new("B9", "b9", (7, 0, "Q9"), true),
    Aarch64Descriptor::new("B10", "b10", (7, 0, "Q10"), true),
    Aarch64Descriptor::new("B11", "b11", (7, 0, "Q11"), true),
    Aarch64Descriptor::new("B12", "b12", (7, 0, "Q12"), true),
    Aarch64Descriptor::new("B13", "b13", (7, 0, "Q13"), true),
    Aarch64Descriptor::new("B14", "b14", (7, 0, "Q14"), true),
    Aarch64Descriptor::new("B15", "b15", (7, 0, "Q15"), true),
    Aarch64Descriptor::new("B16", "b16", (7, 0, "Q16"), true),
    Aarch64Descriptor::new("B17", "b17", (7, 0, "Q17"), true),
    Aarch64Descriptor::new("B18", "b18", (7, 0, "Q18"), true),
    Aarch64Descriptor::new("B19", "b19", (7, 0, "Q19"), true),
    Aarch64Descriptor::new("B20", "b20", (7, 0, "Q20"), true),
    Aarch64Descriptor::new("B21", "b21", (7, 0, "Q21"), true),
    Aarch64Descriptor::new("B22", "b22", (7, 0, "Q22"), true),
    Aarch64Descriptor::new("B23", "b23", (7, 0, "Q23"), true),
    Aarch64Descriptor::new("B24", "b24", (7, 0, "Q24"), true),
    Aarch64Descriptor::new("B25", "b25", (7, 0, "Q25"), true),
    Aarch64Descriptor::new("B26", "b26", (7, 0, "Q26"), true),
    Aarch64Descriptor::new("B27", "b27", (7, 0, "Q27"), true),
    Aarch64Descriptor::new("B28", "b28", (7, 0, "Q28"), true),
    Aarch64Descriptor::new("B29", "b29", (7, 0, "Q29"), true),
    Aarch64Descriptor::new("B30", "b30", (7, 0, "Q30"), true),
    Aarch64Descriptor::new("B31", "b31", (7, 0, "Q31"), true),
    Aarch64Descriptor::new("V0", "v0", (127, 0, "Q0"), true),
    Aarch64Descriptor::new("V1", "v1", (127, 0, "Q1"), true),
    Aarch64Descriptor::new("V2", "v2", (127, 0, "Q2"), true),
    Aarch64Descriptor::new("V3", "v3", (127, 0, "Q3"), true),
    Aarch64Descriptor::new("V4", "v4", (127, 0, "Q4"), true),
    Aarch64Descriptor::new("V5", "v5", (127, 0, "Q5"), true),
    Aarch64Descriptor::new("V6", "v6", (127, 0, "Q6"), true),
    Aarch64Descriptor::new("V7", "v7", (127, 0, "Q7"), true),
    Aarch64Descriptor::new("V8", "v8", (127, 0, "Q8"), true),
    Aarch64Descriptor::new("V9", "v9", (127, 0, "Q9"), true),
    Aarch64Descriptor::new("V10", "v10", (127, 0, "Q10"), true),
    Aarch64Descriptor::new("V11", "v11", (127, 0, "Q11"), true),
    Aarch64Descriptor::new("V12", "v12", (127, 0, "Q12"), true),
    Aarch64Descriptor::new("V13", "v13", (127, 0, "Q13"), true),
    Aarch64Descriptor::new("V14", "v14", (127, 0, "Q14"), true),
    Aarch64Descriptor::new("V15", "v15", (127, 0, "Q15"), true),
    Aarch64Descriptor::new("V16", "v16", (127, 0, "Q16"), true),
    Aarch64Descriptor::new("V17", "v17", (127, 0, "Q17"), true),
    Aarch64Descriptor::new("V18", "v18", (127, 0, "Q18"), true),
    Aarch64Descriptor::new("V19", "v19", (127, 0, "Q19"), true),
    Aarch64Descriptor::new("V20", "v20", (127, 0, "Q20"), true),
    Aarch64Descriptor::new("V21", "v21", (127, 0, "Q21"), true),
    Aarch64Descriptor::new("V22", "v22", (127, 0, "Q22"), true),
    Aarch64Descriptor::new("V23", "v23", (127, 0, "Q23"), true),
    Aarch64Descriptor::new("V24", "v24", (127, 0, "Q24"), true),
    Aarch64Descriptor::new("V25", "v25", (127, 0, "Q25"), true),
    Aarch64Descriptor::new("V26", "v26", (127, 0, "Q26"), true),
    Aarch64Descriptor::new("V27", "v27", (127, 0, "Q27"), true),
    Aarch64Descriptor::new("V28", "v28", (127, 0, "Q28"), true),
    Aarch64Descriptor::new("V29", "v29", (127, 0, "Q29"), true),
    Aarch64Descriptor::new("V30", "v30", (127, 0, "Q30"), true),
    Aarch64Descriptor::new("V31", "v31", (127, 0, "Q31"), true),
];

/// Individual condition flags.
pub static PSEUDO_REGISTERS: [Aarch64Descriptor; 4] = [
    Aarch64Descriptor::pseudo("C", "c", (0, 0, "C"), true),
    Aarch64Descriptor::pseudo("N", "n", (0, 0, "N"), true),
    Aarch64Descriptor::pseudo("V", "v", (0, 0, "V"), true),
    Aarch64Descriptor::pseudo("Z", "z", (0, 0, "Z"), true),
];

/// System registers, accessed through `MRS`/`MSR`.
pub static SYSTEM_REGISTERS: [Aarch64Descriptor; 69] = [
    Aarch64Descriptor::system("ACTLR_EL1", "actlr_el1", sysreg(3, 0, 1, 0, 1), true),
    Aarch64Descriptor::system("ACTLR_EL2", "actlr_el2", sysreg(3, 4, 1, 0, 1), true),
    Aarch64Descriptor::system("ACTLR_EL3", "actlr_el3", sysreg(3, 6, 1, 0, 1), true),
    Aarch64Descriptor::system("AFSR0_EL1", "afsr0_el1", sysreg(3, 0, 5, 1, 0), true),
    Aarch64Descriptor::system("AFSR1_EL1", "afsr1_el1", sysreg(3, 0, 5, 1, 1), true),
    Aarch64Descriptor::system("AMAIR_EL1", "amair_el1", sysreg(3, 0, 10, 3, 0), true),
    Aarch64Descriptor::system("CCSIDR_EL1", "ccsidr_el1", sysreg(3, 1, 0, 0, 0), false),
    Aarch64Descriptor::system("CLIDR_EL1", "clidr_el1", sysreg(3, 1, 0, 0, 1), false),
    Aarch64Descriptor::system("CNTFRQ_EL0", "cntfrq_el0", sysreg(3, 3, 14, 0, 0), true),
    Aarch64Descriptor::system("CNTPCT_EL0", "cntpct_el0", sysreg(3, 3, 14, 0, 1), false),
    Aarch64Descriptor::system("CNTVCT_EL0", "cntvct_el0", sysreg(3, 3, 14, 0, 2), false),
    Aarch64Descriptor::system("CONTEXTIDR_EL1", "contextidr_el1", sysreg(3, 0, 13, 0, 1), true),
    Aarch64Descriptor::system("CPACR_EL1", "cpacr_el1", sysreg(3, 0, 1, 0, 2), true),
    Aarch64Descriptor::system("CSSELR_EL1", "csselr_el1", sysreg(3, 2, 0, 0, 0), true),
    Aarch64Descriptor::system("CTR_EL0", "ctr_el0", sysreg(3, 3, 0, 0, 1), false),
    Aarch64Descriptor::system("CURRENTEL", "currentel", sysreg(3, 0, 4, 2, 2), false),
    Aarch64Descriptor::system("DAIF", "daif", sysreg(3, 3, 4, 2, 1), true),
    Aarch64Descriptor::system("DCZID_EL0", "dczid_el0", sysreg(3, 3, 0, 0, 7), false),
    Aarch64Descriptor::system("ELR_EL1", "elr_el1", sysreg(3, 0, 4, 0, 1), true),
    Aarch64Descriptor::system("ELR_EL2", "elr_el2", sysreg(3, 4, 4, 0, 1), true),
    Aarch64Descriptor::system("ELR_EL3", "elr_el3", sysreg(3, 6, 4, 0, 1), true),
    Aarch64Descriptor::system("ESR_EL1", "esr_el1", sysreg(3, 0, 5, 2, 0), true),
    Aarch64Descriptor::system("ESR_EL2", "esr_el2", sysreg(3, 4, 5, 2, 0), true),
    Aarch64Descriptor::system("ESR_EL3", "esr_el3", sysreg(3, 6, 5, 2, 0), true),
    Aarch64Descriptor::system("FAR_EL1", "far_el1", sysreg(3, 0, 6, 0, 0), true),
    Aarch64Descriptor::system("FAR_EL2", "far_el2", sysreg(3, 4, 6, 0, 0), true),
    Aarch64Descriptor::system("FAR_EL3", "far_el3", sysreg(3, 6, 6, 0, 0), true),
    Aarch64Descriptor::system("FPCR", "fpcr", sysreg(3, 3, 4, 4, 0), true),
    Aarch64Descriptor::system("FPSR", "fpsr", sysreg(3, 3, 4, 4, 1), true),
    Aarch64Descriptor::system("HCR_EL2", "hcr_el2", sysreg(3, 4, 1, 1, 0), true),
    Aarch64Descriptor::system("ID_AA64ISAR0_EL1", "id_aa64isar0_el1", sysreg(3, 0, 0, 6, 0), false),
    Aarch64Descriptor::system("ID_AA64MMFR0_EL1", "id_aa64mmfr0_el1", sysreg(3, 0, 0, 7, 0), false),
    Aarch64Descriptor::system("ID_AA64PFR0_EL1", "id_aa64pfr0_el1", sysreg(3, 0, 0, 4, 0), false),
    Aarch64Descriptor::system("MAIR_EL1", "mair_el1", sysreg(3, 0, 10, 2, 0), true),
    Aarch64Descriptor::system("MAIR_EL2", "mair_el2", sysreg(3, 4, 10, 2, 0), true),
    Aarch64Descriptor::system("MAIR_EL3", "mair_el3", sysreg(3, 6, 10, 2, 0), true),
    Aarch64Descriptor::system("MIDR_EL1", "midr_el1", sysreg(3, 0, 0, 0, 0), false),
    Aarch64Descriptor::system("MPIDR_EL1", "mpidr_el1", sysreg(3, 0, 0, 0, 5), false),
    Aarch64Descriptor::system("NZCV", "nzcv", sysreg(3, 3, 4, 2, 0), true),
    Aarch64Descriptor::system("PAR_EL1", "par_el1", sysreg(3, 0, 7, 4, 0), true),
    Aarch64Descriptor::system("REVIDR_EL1", "revidr_el1", sysreg(3, 0, 0, 0, 6), false),
    Aarch64Descriptor::system("SCR_EL3", "scr_el3", sysreg(3, 6, 1, 1, 0), true),
    Aarch64Descriptor::system("SCTLR_EL1", "sctlr_el1", sysreg(3, 0, 1, 0, 0), true),
    Aarch64Descriptor::system("SCTLR_EL2", "sctlr_el2", sysreg(3, 4, 1, 0, 0), true),
    Aarch64Descriptor::system("SCTLR_EL3", "sctlr_el3", sysreg(3, 6, 1, 0, 0), true),
    Aarch64Descriptor::system("SP_EL0", "sp_el0", sysreg(3, 0, 4, 1, 0), true),
    Aarch64Descriptor::system("SP_EL1", "sp_el1", sysreg(3, 4, 4, 1, 0), true),
    Aarch64Descriptor::system("SP_EL2", "sp_el2", sysreg(3, 6, 4, 1, 0), true),
    Aarch64Descriptor::system("SPSEL", "spsel", sysreg(3, 0, 4, 2, 0), true),
    Aarch64Descriptor::system("SPSR_EL1", "spsr_el1", sysreg(3, 0, 4, 0, 0), true),
    Aarch64Descriptor::system("SPSR_EL2", "spsr_el2", sysreg(3, 4, 4, 0, 0), true),
    Aarch64Descriptor::system("SPSR_EL3", "spsr_el3", sysreg(3, 6, 4, 0, 0), true),
    Aarch64Descriptor::system("TCR_EL1", "tcr_el1", sysreg(3, 0, 2, 0, 2), true),
    Aarch64Descriptor::system("TCR_EL2", "tcr_el2", sysreg(3, 4, 2, 0, 2), true),
    Aarch64Descriptor::system("TCR_EL3", "tcr_el3", sysreg(3, 6, 2, 0, 2), true),
    Aarch64Descriptor::system("TPIDR_EL0", "tpidr_el0", sysreg(3, 3, 13, 0, 2), true),
    Aarch64Descriptor::system("TPIDR_EL1", "tpidr_el1", sysreg(3, 0, 13, 0, 4), true),
    Aarch64Descriptor::system("TPIDR_EL2", "tpidr_el2", sysreg(3, 4, 13, 0, 2), true),
    Aarch64Descriptor::system("TPIDR_EL3", "tpidr_el3", sysreg(3, 6, 13, 0, 2), true),
    Aarch64Descriptor::system("TPIDRRO_EL0", "tpidrro_el0", sysreg(3, 3, 13, 0, 3), true),
    Aarch64Descriptor::system("TTBR0_EL1", "ttbr0_el1", sysreg(3, 0, 2, 0, 0), true),
    Aarch64Descriptor::system("TTBR0_EL2", "ttbr0_el2", sysreg(3, 4, 2, 0, 0), true),
    Aarch64Descriptor::system("TTBR0_EL3", "ttbr0_el3", sysreg(3, 6, 2, 0, 0), true),
    Aarch64Descriptor::system("TTBR1_EL1", "ttbr1_el1", sysreg(3, 0, 2, 0, 1), true),
    Aarch64Descriptor::system("VBAR_EL1", "vbar_el1", sysreg(3, 0, 12, 0, 0), true),
    Aarch64Descriptor::system("VBAR_EL2", "vbar_el2", sysreg(3, 4, 12, 0, 0), true),
    Aarch64Descriptor::system("VBAR_EL3", "vbar_el3", sysreg(3, 6, 12, 0, 0), true),
    Aarch64Descriptor::system("VTCR_EL2", "vtcr_el2", sysreg(3, 4, 2, 1, 2), true),
    Aarch64Descriptor::system("VTTBR_EL2", "vttbr_el2", sysreg(3, 4, 2, 1, 0), true),
];

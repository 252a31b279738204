//! ARM32 register descriptors.

use std::borrow::Cow;
use std::sync::LazyLock;

use serde::Deserialize;

use crate::availability::{Availability, Variants};
use crate::isa::{Descriptor, Family, Isa, Layout, RegisterKind};
use crate::table::DescriptorTable;

/// ARM32 descriptor record.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Arm32Descriptor {
    /// Canonical upper-case name.
    pub name: Cow<'static, str>,
    /// Lower-case spelling used by disassemblers.
    pub lower_name: Cow<'static, str>,
    /// Bit range inside the parent register.
    pub layout: Layout,
    /// Whether writes are architecturally permitted.
    pub mutable: bool,
    /// Table section.
    #[serde(default)]
    pub kind: RegisterKind,
}

impl Arm32Descriptor {
    /// Core or VFP register record.
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
            kind: RegisterKind::Pseudo,
        }
    }
}

impl Descriptor for Arm32Descriptor {
    const ISA: Isa = Isa::Arm32;

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> RegisterKind {
        self.kind
    }

    fn availability(&self) -> Availability {
        Availability::only(Variants::ARM32)
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
        } else {
            None
        }
    }
}

/// The built-in ARM32 table.
pub fn table() -> &'static DescriptorTable<Arm32Descriptor> {
    static TABLE: LazyLock<DescriptorTable<Arm32Descriptor>> = LazyLock::new(|| {
        DescriptorTable::from_sections(&[&REGISTERS[..], &PSEUDO_REGISTERS[..]])
    });
    &TABLE
}

/// Core, status and VFP/NEON registers.
pub static REGISTERS: [Arm32Descriptor; 98] = [
    Arm32Descriptor::new("R0", "r0", (31, 0, "R0"), true),
    Arm32Descriptor::new("R1", "r1", (31, 0, "R1"), true),
    Arm32Descriptor::new("R2", "r2", (31, 0, "R2"), true),
    Arm32Descriptor::new("R3", "r3", (31, 0, "R3"), true),
    Arm32Descriptor::new("R4", "r4", (31, 0, "R4"), true),
    Arm32Descriptor::new("R5", "r5", (31, 0, "R5"), true),
    Arm32Descriptor::new("R6", "r6", (31, 0, "R6"), true),
    Arm32Descriptor::new("R7", "r7", (31, 0, "R7"), true),
    Arm32Descriptor::new("R8", "r8", (31, 0, "R8"), true),
    Arm32Descriptor::new("R9", "r9", (31, 0, "R9"), true),
    Arm32Descriptor::new("R10", "r10", (31, 0, "R10"), true),
    Arm32Descriptor::new("R11", "r11", (31, 0, "R11"), true),
    Arm32Descriptor::new("R12", "r12", (31, 0, "R12"), true),
    Arm32Descriptor::new("SP", "sp", (31, 0, "SP"), true),
    Arm32Descriptor::new("R14", "r14", (31, 0, "R14"), true),
    Arm32Descriptor::new("PC", "pc", (31, 0, "PC"), true),
    Arm32Descriptor::new("APSR", "apsr", (31, 0, "APSR"), true),
    Arm32Descriptor::new("Q0", "q0", (127, 0, "Q0"), true),
    Arm32Descriptor::new("Q1", "q1", (127, 0, "Q1"), true),
    Arm32Descriptor::new("Q2", "q2", (127, 0, "Q2"), true),
    Arm32Descriptor::new("Q3", "q3", (127, 0, "Q3"), true),
    Arm32Descriptor::new("Q4", "q4", (127, 0, "Q4"), true),
    Arm32Descriptor::new("Q5", "q5", (127, 0, "Q5"), true),
    Arm32Descriptor::new("Q6", "q6", (127, 0, "Q6"), true),
    Arm32Descriptor::new("Q7", "q7", (127, 0, "Q7"), true),
    Arm32Descriptor::new("Q8", "q8", (127, 0, "Q8"), true),
    Arm32Descriptor::new("Q9", "q9", (127, 0, "Q9"), true),
    Arm32Descriptor::new("Q10", "q10", (127, 0, "Q10"), true),
    Arm32Descriptor::new("Q11", "q11", (127, 0, "Q11"), true),
    Arm32Descriptor::new("Q12", "q12", (127, 0, "Q12"), true),
    Arm32Descriptor::new("Q13", "q13", (127, 0, "Q13"), true),
    Arm32Descriptor::new("Q14", "q14", (127, 0, "Q14"), true),
    Arm32Descriptor::new("Q15", "q15", (127, 0, "Q15"), true),
    Arm32Descriptor::new("D0", "d0", (63, 0, "Q0"), true),
    Arm32Descriptor::new("D1", "d1", (63, 0, "Q0"), true),
    Arm32Descriptor::new("D2", "d2", (63, 0, "Q1"), true),
    Arm32Descriptor::new("D3", "d3", (63, 0, "Q1"), true),
    Arm32Descriptor::new("D4", "d4", (63, 0, "Q2"), true),
    Arm32Descriptor::new("D5", "d5", (63, 0, "Q2"), true),
    Arm32Descriptor::new("D6", "d6", (63, 0, "Q3"), true),
    Arm32Descriptor::new("D7", "d7", (63, 0, "Q3"), true),
    Arm32Descriptor::new("D8", "d8", (63, 0, "Q4"), true),
    Arm32Descriptor::new("D9", "d9", (63, 0, "Q4"), true),
    Arm32Descriptor::new("D10", "d10", (63, 0, "Q5"), true),
    Arm32Descriptor::new("D11", "d11", (63, 0, "Q5"), true),
    Arm32Descriptor::new("D12", "d12", (63, 0, "Q6"), true),
    Arm32Descriptor::new("D13", "d13", (63, 0, "Q6"), true),
    Arm32Descriptor::new("D14", "d14", (63, 0, "Q7"), true),
    Arm32Descriptor::new("D15", "d15", (63, 0, "Q7"), true),
    Arm32Descriptor::new("D16", "d16", (63, 0, "Q8"), true),
    Arm32Descriptor::new("D17", "d17", (63, 0, "Q8"), true),
    Arm32Descriptor::new("D18", "d18", (63, 0, "Q9"), true),
    Arm32Descriptor::new("D19", "d19", (63, 0, "Q9"), true),
    Arm32Descriptor::new("D20", "d20", (63, 0, "Q10"), true),
    Arm32Descriptor::new("D21", "d21", (63, 0, "Q10"), true),
    Arm32Descriptor::new("D22", "d22", (63, 0, "Q11"), true),
    Arm32Descriptor::new("D23", "d23", (63, 0, "Q11"), true),
    Arm32Descriptor::new("D24", "d24", (63, 0, "Q12"), true),
    Arm32Descriptor::new("D25", "d25", (63, 0, "Q12"), true),
    Arm32Descriptor::new("D26", "d26", (63, 0, "Q13"), true),
    Arm32Descriptor::new("D27", "d27", (63, 0, "Q13"), true),
    Arm32Descriptor::new("D28", "d28", (63, 0, "Q14"), true),
    Arm32Descriptor::new("D29", "d29", (63, 0, "Q14"), true),
    Arm32Descriptor::new("D30", "d30", (63, 0, "Q15"), true),
    Arm32Descriptor::new("D31", "d31", (63, 0, "Q15"), true),
    Arm32Descriptor::new("S0", "s0", (31, 0, "Q0"), true),
    Arm32Descriptor::new("S1", "s1", (31, 0, "Q0"), true),
    Arm32Descriptor::new("S2", "s2", (31, 0, "Q0"), true),
    Arm32Descriptor::new("S3", "s3", (31, 0, "Q0"), true),
    Arm32Descriptor::new("S4", "s4", (31, 0, "Q1"), true),
    Arm32Descriptor::new("S5", "s5", (31, 0, "Q1"), true),
    Arm32Descriptor::new("S6", "s6", (31, 0, "Q1"), true),
    Arm32Descriptor::new("S7", "s7", (31, 0, "Q1"), true),
    Arm32Descriptor::new("S8", "s8", (31, 0, "Q2"), true),
    Arm32Descriptor::new("S9", "s9", (31, 0, "Q2"), true),
    Arm32Descriptor::new("S10", "s10", (31, 0, "Q2"), true),
    Arm32Descriptor::new("S11", "s11", (31, 0, "Q2"), true),
    Arm32Descriptor::new("S12", "s12", (31, 0, "Q3"), true),
    Arm32Descriptor::new("S13", "s13", (31, 0, "Q3"), true),
    Arm32Descriptor::new("S14", "s14", (31, 0, "Q3"), true),
    Arm32Descriptor::new("S15", "s15", (31, 0, "Q3"), true),
    Arm32Descriptor::new("S16", "s16", (31, 0, "Q4"), true),
    Arm32Descriptor::new("S17", "s17", (31, 0, "Q4"), true),
    Arm32Descriptor::new("S18", "s18", (31, 0, "Q4"), true),
    Arm32Descriptor::new("S19", "s19", (31, 0, "Q4"), true),
    Arm32Descriptor::new("S20", "s20", (31, 0, "Q5"), true),
    Arm32Descriptor::new("S21", "s21", (31, 0, "Q5"), true),
    Arm32Descriptor::new("S22", "s22", (31, 0, "Q5"), true),
    Arm32Descriptor::new("S23", "s23", (31, 0, "Q5"), true),
    Arm32Descriptor::new("S24", "s24", (31, 0, "Q6"), true),
    Arm32Descriptor::new("S25", "s25", (31, 0, "Q6"), true),
    Arm32Descriptor::new("S26", "s26", (31, 0, "Q6"), true),
    Arm32Descriptor::new("S27", "s27", (31, 0, "Q6"), true),
    Arm32Descriptor::new("S28", "s28", (31, 0, "Q7"), true),
    Arm32Descriptor::new("S29", "s29", (31, 0, "Q7"), true),
    Arm32Descriptor::new("S30", "s30", (31, 0, "Q7"), true),
    Arm32Descriptor::new("S31", "s31", (31, 0, "Q7"), true),
    Arm32Descriptor::new("FPSCR", "fpscr", (31, 0, "FPSCR"), true),
];

/// APSR condition flags.
pub static PSEUDO_REGISTERS: [Arm32Descriptor; 4] = [
    Arm32Descriptor::pseudo("C", "c", (0, 0, "C"), true),
    Arm32Descriptor::pseudo("N", "n", (0, 0, "N"), true),
    Arm32Descriptor::pseudo("V", "v", (0, 0, "V"), true),
    Arm32Descriptor::pseudo("Z", "z", (0, 0, "Z"), true),
];

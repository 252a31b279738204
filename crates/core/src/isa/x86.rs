//! x86 register descriptors.
//!
//! One physical table serves two families. Each record carries a view for x86-64 and a
//! view for 32-bit x86, plus a flag saying whether the encoding is addressable in 32-bit
//! mode at all. `X86_64` takes every record; `X86` takes only the flagged ones.
//!
//! Record order is the order of the native enumeration's x86 block.

use std::borrow::Cow;
use std::sync::LazyLock;

use serde::Deserialize;

use crate::availability::{Availability, Variants};
use crate::isa::{Descriptor, Family, Isa, Layout, RegisterKind};
use crate::table::DescriptorTable;

/// Bit range and parent given as `(upper, lower, parent)`.
type Span = (u32, u32, &'static str);

/// x86 descriptor record.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct X86Descriptor {
    /// Canonical upper-case name.
    pub name: Cow<'static, str>,
    /// Lower-case spelling used by disassemblers.
    pub lower_name: Cow<'static, str>,
    /// Layout in 64-bit mode.
    #[serde(rename = "x86_64")]
    pub long: Layout,
    /// Layout in 32-bit mode.
    #[serde(rename = "x86")]
    pub legacy: Layout,
    /// Whether the encoding exists in 32-bit mode.
    #[serde(rename = "x86_avail")]
    pub legacy_available: bool,
    /// Table section.
    #[serde(default)]
    pub kind: RegisterKind,
}

impl X86Descriptor {
    const fn with_kind(
        name: &'static str,
        lower_name: &'static str,
        long: Span,
        legacy: Span,
        legacy_available: bool,
        kind: RegisterKind,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            lower_name: Cow::Borrowed(lower_name),
            long: Layout::new(long.0, long.1, long.2),
            legacy: Layout::new(legacy.0, legacy.1, legacy.2),
            legacy_available,
            kind,
        }
    }

    /// Architectural register record.
    pub const fn new(
        name: &'static str,
        lower_name: &'static str,
        long: Span,
        legacy: Span,
        legacy_available: bool,
    ) -> Self {
        Self::with_kind(
            name,
            lower_name,
            long,
            legacy,
            legacy_available,
            RegisterKind::Architectural,
        )
    }

    /// Pseudo register record (flag bits, control-word fields).
    pub const fn pseudo(
        name: &'static str,
        lower_name: &'static str,
        long: Span,
        legacy: Span,
        legacy_available: bool,
    ) -> Self {
        Self::with_kind(
            name,
            lower_name,
            long,
            legacy,
            legacy_available,
            RegisterKind::Pseudo,
        )
    }
}

impl Descriptor for X86Descriptor {
    const ISA: Isa = Isa::X86;

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> RegisterKind {
        self.kind
    }

    fn availability(&self) -> Availability {
        if self.legacy_available {
            Availability::only(Variants::X86.union(Variants::X86_64))
        } else {
            Availability::only(Variants::X86_64)
        }
    }

    fn layout(&self, family: Family) -> Layout {
        match family {
            Family::X86 => self.legacy.clone(),
            _ => self.long.clone(),
        }
    }

    fn missing_field(&self) -> Option<&'static str> {
        if self.name.is_empty() {
            Some("name")
        } else if self.lower_name.is_empty() {
            Some("lower_name")
        } else if self.long.parent.is_empty() {
            Some("x86_64.parent")
        } else if self.legacy.parent.is_empty() {
            Some("x86.parent")
        } else {
            None
        }
    }
}

/// The built-in x86 table: architectural registers followed by pseudo registers.
pub fn table() -> &'static DescriptorTable<X86Descriptor> {
    static TABLE: LazyLock<DescriptorTable<X86Descriptor>> = LazyLock::new(|| {
        DescriptorTable::from_sections(&[&REGISTERS[..], &PSEUDO_REGISTERS[..]])
    });
    &TABLE
}

/// Registers the disassembler models, in native enumeration order.
pub static REGISTERS: [X86Descriptor; 194] = [
    X86Descriptor::new("RAX", "rax", (63, 0, "RAX"), (31, 0, "EAX"), false),
    X86Descriptor::new("RBX", "rbx", (63, 0, "RBX"), (31, 0, "EBX"), false),
    X86Descriptor::new("RCX", "rcx", (63, 0, "RCX"), (31, 0, "ECX"), false),
    X86Descriptor::new("RDX", "rdx", (63, 0, "RDX"), (31, 0, "EDX"), false),
    X86Descriptor::new("RDI", "rdi", (63, 0, "RDI"), (31, 0, "EDI"), false),
    X86Descriptor::new("RSI", "rsi", (63, 0, "RSI"), (31, 0, "ESI"), false),
    X86Descriptor::new("RBP", "rbp", (63, 0, "RBP"), (31, 0, "EBP"), false),
    X86Descriptor::new("RSP", "rsp", (63, 0, "RSP"), (31, 0, "ESP"), false),
    X86Descriptor::new("RIP", "rip", (63, 0, "RIP"), (31, 0, "EIP"), false),
    X86Descriptor::new("R8", "r8", (63, 0, "R8"), (63, 0, "R8"), false),
    X86Descriptor::new("R9", "r9", (63, 0, "R9"), (63, 0, "R9"), false),
    X86Descriptor::new("R10", "r10", (63, 0, "R10"), (63, 0, "R10"), false),
    X86Descriptor::new("R11", "r11", (63, 0, "R11"), (63, 0, "R11"), false),
    X86Descriptor::new("R12", "r12", (63, 0, "R12"), (63, 0, "R12"), false),
    X86Descriptor::new("R13", "r13", (63, 0, "R13"), (63, 0, "R13"), false),
    X86Descriptor::new("R14", "r14", (63, 0, "R14"), (63, 0, "R14"), false),
    X86Descriptor::new("R15", "r15", (63, 0, "R15"), (63, 0, "R15"), false),
    X86Descriptor::new("R8D", "r8d", (31, 0, "R8"), (31, 0, "R8"), false),
    X86Descriptor::new("R9D", "r9d", (31, 0, "R9"), (31, 0, "R9"), false),
    X86Descriptor::new("R10D", "r10d", (31, 0, "R10"), (31, 0, "R10"), false),
    X86Descriptor::new("R11D", "r11d", (31, 0, "R11"), (31, 0, "R11"), false),
    X86Descriptor::new("R12D", "r12d", (31, 0, "R12"), (31, 0, "R12"), false),
    X86Descriptor::new("R13D", "r13d", (31, 0, "R13"), (31, 0, "R13"), false),
    X86Descriptor::new("R14D", "r14d", (31, 0, "R14"), (31, 0, "R14"), false),
    X86Descriptor::new("R15D", "r15d", (31, 0, "R15"), (31, 0, "R15"), false),
    X86Descriptor::new("R8W", "r8w", (15, 0, "R8"), (15, 0, "R8"), false),
    X86Descriptor::new("R9W", "r9w", (15, 0, "R9"), (15, 0, "R9"), false),
    X86Descriptor::new("R10W", "r10w", (15, 0, "R10"), (15, 0, "R10"), false),
    X86Descriptor::new("R11W", "r11w", (15, 0, "R11"), (15, 0, "R11"), false),
    X86Descriptor::new("R12W", "r12w", (15, 0, "R12"), (15, 0, "R12"), false),
    X86Descriptor::new("R13W", "r13w", (15, 0, "R13"), (15, 0, "R13"), false),
    X86Descriptor::new("R14W", "r14w", (15, 0, "R14"), (15, 0, "R14"), false),
    X86Descriptor::new("R15W", "r15w", (15, 0, "R15"), (15, 0, "R15"), false),
    X86Descriptor::new("R8B", "r8b", (7, 0, "R8"), (7, 0, "R8"), false),
    X86Descriptor::new("R9B", "r9b", (7, 0, "R9"), (7, 0, "R9"), false),
    X86Descriptor::new("R10B", "r10b", (7, 0, "R10"), (7, 0, "R10"), false),
    X86Descriptor::new("R11B", "r11b", (7, 0, "R11"), (7, 0, "R11"), false),
    X86Descriptor::new("R12B", "r12b", (7, 0, "R12"), (7, 0, "R12"), false),
    X86Descriptor::new("R13B", "r13b", (7, 0, "R13"), (7, 0, "R13"), false),
    X86Descriptor::new("R14B", "r14b", (7, 0, "R14"), (7, 0, "R14"), false),
    X86Descriptor::new("R15B", "r15b", (7, 0, "R15"), (7, 0, "R15"), false),
    X86Descriptor::new("EAX", "eax", (31, 0, "RAX"), (31, 0, "EAX"), true),
    X86Descriptor::new("EBX", "ebx", (31, 0, "RBX"), (31, 0, "EBX"), true),
    X86Descriptor::new("ECX", "ecx", (31, 0, "RCX"), (31, 0, "ECX"), true),
    X86Descriptor::new("EDX", "edx", (31, 0, "RDX"), (31, 0, "EDX"), true),
    X86Descriptor::new("EDI", "edi", (31, 0, "RDI"), (31, 0, "EDI"), true),
    X86Descriptor::new("ESI", "esi", (31, 0, "RSI"), (31, 0, "ESI"), true),
    X86Descriptor::new("EBP", "ebp", (31, 0, "RBP"), (31, 0, "EBP"), true),
    X86Descriptor::new("ESP", "esp", (31, 0, "RSP"), (31, 0, "ESP"), true),
    X86Descriptor::new("EIP", "eip", (31, 0, "RIP"), (31, 0, "EIP"), true),
    X86Descriptor::new("AX", "ax", (15, 0, "RAX"), (15, 0, "EAX"), true),
    X86Descriptor::new("BX", "bx", (15, 0, "RBX"), (15, 0, "EBX"), true),
    X86Descriptor::new("CX", "cx", (15, 0, "RCX"), (15, 0, "ECX"), true),
    X86Descriptor::new("DX", "dx", (15, 0, "RDX"), (15, 0, "EDX"), true),
    X86Descriptor::new("DI", "di", (15, 0, "RDI"), (15, 0, "EDI"), true),
    X86Descriptor::new("SI", "si", (15, 0, "RSI"), (15, 0, "ESI"), true),
    X86Descriptor::new("BP", "bp", (15, 0, "RBP"), (15, 0, "EBP"), true),
    X86Descriptor::new("SP", "sp", (15, 0, "RSP"), (15, 0, "ESP"), true),
    X86Descriptor::new("IP", "ip", (15, 0, "RIP"), (15, 0, "EIP"), true),
    X86Descriptor::new("AH", "ah", (15, 8, "RAX"), (15, 8, "EAX"), true),
    X86Descriptor::new("BH", "bh", (15, 8, "RBX"), (15, 8, "EBX"), true),
    X86Descriptor::new("CH", "ch", (15, 8, "RCX"), (15, 8, "ECX"), true),
    X86Descriptor::new("DH", "dh", (15, 8, "RDX"), (15, 8, "EDX"), true),
    X86Descriptor::new("AL", "al", (7, 0, "RAX"), (7, 0, "EAX"), true),
    X86Descriptor::new("BL", "bl", (7, 0, "RBX"), (7, 0, "EBX"), true),
    X86Descriptor::new("CL", "cl", (7, 0, "RCX"), (7, 0, "ECX"), true),
    X86Descriptor::new("DL", "dl", (7, 0, "RDX"), (7, 0, "EDX"), true),
    X86Descriptor::new("DIL", "dil", (7, 0, "RDI"), (7, 0, "RDI"), false),
    X86Descriptor::new("SIL", "sil", (7, 0, "RSI"), (7, 0, "RSI"), false),
    X86Descriptor::new("BPL", "bpl", (7, 0, "RBP"), (7, 0, "RBP"), false),
    X86Descriptor::new("SPL", "spl", (7, 0, "RSP"), (7, 0, "RSP"), false),
    X86Descriptor::new("EFLAGS", "eflags", (63, 0, "EFLAGS"), (31, 0, "EFLAGS"), true),
    X86Descriptor::new("MM0", "mm0", (63, 0, "ST0"), (63, 0, "ST0"), true),
    X86Descriptor::new("MM1", "mm1", (63, 0, "ST1"), (63, 0, "ST1"), true),
    X86Descriptor::new("MM2", "mm2", (63, 0, "ST2"), (63, 0, "ST2"), true),
    X86Descriptor::new("MM3", "mm3", (63, 0, "ST3"), (63, 0, "ST3"), true),
    X86Descriptor::new("MM4", "mm4", (63, 0, "ST4"), (63, 0, "ST4"), true),
    X86Descriptor::new("MM5", "mm5", (63, 0, "ST5"), (63, 0, "ST5"), true),
    X86Descriptor::new("MM6", "mm6", (63, 0, "ST6"), (63, 0, "ST6"), true),
    X86Descriptor::new("MM7", "mm7", (63, 0, "ST7"), (63, 0, "ST7"), true),
    X86Descriptor::new("ST0", "st0", (79, 0, "ST0"), (79, 0, "ST0"), true),
    X86Descriptor::new("ST1", "st1", (79, 0, "ST1"), (79, 0, "ST1"), true),
    X86Descriptor::new("ST2", "st2", (79, 0, "ST2"), (79, 0, "ST2"), true),
    X86Descriptor::new("ST3", "st3", (79, 0, "ST3"), (79, 0, "ST3"), true),
    X86Descriptor::new("ST4", "st4", (79, 0, "ST4"), (79, 0, "ST4"), true),
    X86Descriptor::new("ST5", "st5", (79, 0, "ST5"), (79, 0, "ST5"), true),
    X86Descriptor::new("ST6", "st6", (79, 0, "ST6"), (79, 0, "ST6"), true),
    X86Descriptor::new("ST7", "st7", (79, 0, "ST7"), (79, 0, "ST7"), true),
    X86Descriptor::new("FCW", "fcw", (15, 0, "FCW"), (15, 0, "FCW"), true),
    X86Descriptor::new("FSW", "fsw", (15, 0, "FSW"), (15, 0, "FSW"), true),
    X86Descriptor::new("FTW", "ftw", (15, 0, "FTW"), (15, 0, "FTW"), true),
    X86Descriptor::new("FOP", "fop", (15, 0, "FOP"), (15, 0, "FOP"), true),
    X86Descriptor::new("FCS", "fcs", (15, 0, "FCS"), (15, 0, "FCS"), true),
    X86Descriptor::new("FDS", "fds", (15, 0, "FDS"), (15, 0, "FDS"), true),
    X86Descriptor::new("FIP", "fip", (63, 0, "FIP"), (31, 0, "FIP"), true),
    X86Descriptor::new("FDP", "fdp", (63, 0, "FDP"), (31, 0, "FDP"), true),
    X86Descriptor::new("MXCSR", "mxcsr", (31, 0, "MXCSR"), (31, 0, "MXCSR"), true),
    X86Descriptor::new(
        "MXCSR_MASK",
        "mxcsr_mask",
        (31, 0, "MXCSR_MASK"),
        (31, 0, "MXCSR_MASK"),
        true,
    ),
    X86Descriptor::new("XMM0", "xmm0", (127, 0, "ZMM0"), (127, 0, "ZMM0"), true),
    X86Descriptor::new("XMM1", "xmm1", (127, 0, "ZMM1"), (127, 0, "ZMM1"), true),
    X86Descriptor::new("XMM2", "xmm2", (127, 0, "ZMM2"), (127, 0, "ZMM2"), true),
    X86Descriptor::new("XMM3", "xmm3", (127, 0, "ZMM3"), (127, 0, "ZMM3"), true),
    X86Descriptor::new("XMM4", "xmm4", (127, 0, "ZMM4"), (127, 0, "ZMM4"), true),
    X86Descriptor::new("XMM5", "xmm5", (127, 0, "ZMM5"), (127, 0, "ZMM5"), true),
    X86Descriptor::new("XMM6", "xmm6", (127, 0, "ZMM6"), (127, 0, "ZMM6"), true),
    X86Descriptor::new("XMM7", "xmm7", (127, 0, "ZMM7"), (127, 0, "ZMM7"), true),
    X86Descriptor::new("XMM8", "xmm8", (127, 0, "ZMM8"), (127, 0, "ZMM8"), false),
    X86Descriptor::new("XMM9", "xmm9", (127, 0, "ZMM9"), (127, 0, "ZMM9"), false),
    X86Descriptor::new("XMM10", "xmm10", (127, 0, "ZMM10"), (127, 0, "ZMM10"), false),
    X86Descriptor::new("XMM11", "xmm11", (127, 0, "ZMM11"), (127, 0, "ZMM11"), false),
    X86Descriptor::new("XMM12", "xmm12", (127, 0, "ZMM12"), (127, 0, "ZMM12"), false),
    X86Descriptor::new("XMM13", "xmm13", (127, 0, "ZMM13"), (127, 0, "ZMM13"), false),
    X86Descriptor::new("XMM14", "xmm14", (127, 0, "ZMM14"), (127, 0, "ZMM14"), false),
    X86Descriptor::new("XMM15", "xmm15", (127, 0, "ZMM15"), (127, 0, "ZMM15"), false),
    X86Descriptor::new("YMM0", "ymm0", (255, 0, "ZMM0"), (255, 0, "ZMM0"), true),
    X86Descriptor::new("YMM1", "ymm1", (255, 0, "ZMM1"), (255, 0, "ZMM1"), true),
    X86Descriptor::new("YMM2", "ymm2", (255, 0, "ZMM2"), (255, 0, "ZMM2"), true),
    X86Descriptor::new("YMM3", "ymm3", (255, 0, "ZMM3"), (255, 0, "ZMM3"), true),
    X86Descriptor::new("YMM4", "ymm4", (255, 0, "ZMM4"), (255, 0, "ZMM4"), true),
    X86Descriptor::new("YMM5", "ymm5", (255, 0, "ZMM5"), (255, 0, "ZMM5"), true),
    X86Descriptor::new("YMM6", "ymm6", (255, 0, "ZMM6"), (255, 0, "ZMM6"), true),
    X86Descriptor::new("YMM7", "ymm7", (255, 0, "ZMM7"), (255, 0, "ZMM7"), true),
    X86Descriptor::new("YMM8", "ymm8", (255, 0, "ZMM8"), (255, 0, "ZMM8"), false),
    X86Descriptor::new("YMM9", "ymm9", (255, 0, "ZMM9"), (255, 0, "ZMM9"), false),
    X86Descriptor::new("YMM10", "ymm10", (255, 0, "ZMM10"), (255, 0, "ZMM10"), false),
    X86Descriptor::new("YMM11", "ymm11", (255, 0, "ZMM11"), (255, 0, "ZMM11"), false),
    X86Descriptor::new("YMM12", "ymm12", (255, 0, "ZMM12"), (255, 0, "ZMM12"), false),
    X86Descriptor::new("YMM13", "ymm13", (255, 0, "ZMM13"), (255, 0, "ZMM13"), false),
    X86Descriptor::new("YMM14", "ymm14", (255, 0, "ZMM14"), (255, 0, "ZMM14"), false),
    X86Descriptor::new("YMM15", "ymm15", (255, 0, "ZMM15"), (255, 0, "ZMM15"), false),
    X86Descriptor::new("ZMM0", "zmm0", (511, 0, "ZMM0"), (511, 0, "ZMM0"), true),
    X86Descriptor::new("ZMM1", "zmm1", (511, 0, "ZMM1"), (511, 0, "ZMM1"), true),
    X86Descriptor::new("ZMM2", "zmm2", (511, 0, "ZMM2"), (511, 0, "ZMM2"), true),
    X86Descriptor::new("ZMM3", "zmm3", (511, 0, "ZMM3"), (511, 0, "ZMM3"), true),
    X86Descriptor::new("ZMM4", "zmm4", (511, 0, "ZMM4"), (511, 0, "ZMM4"), true),
    X86Descriptor::new("ZMM5", "zmm5", (511, 0, "ZMM5"), (511, 0, "ZMM5"), true),
    X86Descriptor::new("ZMM6", "zmm6", (511, 0, "ZMM6"), (511, 0, "ZMM6"), true),
    X86Descriptor::new("ZMM7", "zmm7", (511, 0, "ZMM7"), (511, 0, "ZMM7"), true),
    X86Descriptor::new("ZMM8", "zmm8", (511, 0, "ZMM8"), (511, 0, "ZMM8"), false),
    X86Descriptor::new("ZMM9", "zmm9", (511, 0, "ZMM9"), (511, 0, "ZMM9"), false),
    X86Descriptor::new("ZMM10", "zmm10", (511, 0, "ZMM10"), (511, 0, "ZMM10"), false),
    X86Descriptor::new("ZMM11", "zmm11", (511, 0, "ZMM11"), (511, 0, "ZMM11"), false),
    X86Descriptor::new("ZMM12", "zmm12", (511, 0, "ZMM12"), (511, 0, "ZMM12"), false),
    X86Descriptor::new("ZMM13", "zmm13", (511, 0, "ZMM13"), (511, 0, "ZMM13"), false),
    X86Descriptor::new("ZMM14", "zmm14", (511, 0, "ZMM14"), (511, 0, "ZMM14"), false),
    X86Descriptor::new("ZMM15", "zmm15", (511, 0, "ZMM15"), (511, 0, "ZMM15"), false),
    X86Descriptor::new("ZMM16", "zmm16", (511, 0, "ZMM16"), (511, 0, "ZMM16"), false),
    X86Descriptor::new("ZMM17", "zmm17", (511, 0, "ZMM17"), (511, 0, "ZMM17"), false),
    X86Descriptor::new("ZMM18", "zmm18", (511, 0, "ZMM18"), (511, 0, "ZMM18"), false),
    X86Descriptor::new("ZMM19", "zmm19", (511, 0, "ZMM19"), (511, 0, "ZMM19"), false),
    X86Descriptor::new("ZMM20", "zmm20", (511, 0, "ZMM20"), (511, 0, "ZMM20"), false),
    X86Descriptor::new("ZMM21", "zmm21", (511, 0, "ZMM21"), (511, 0, "ZMM21"), false),
    X86Descriptor::new("ZMM22", "zmm22", (511, 0, "ZMM22"), (511, 0, "ZMM22"), false),
    X86Descriptor::new("ZMM23", "zmm23", (511, 0, "ZMM23"), (511, 0, "ZMM23"), false),
    X86Descriptor::new("ZMM24", "zmm24", (511, 0, "ZMM24"), (511, 0, "ZMM24"), false),
    X86Descriptor::new("ZMM25", "zmm25", (511, 0, "ZMM25"), (511, 0, "ZMM25"), false),
    X86Descriptor::new("ZMM26", "zmm26", (511, 0, "ZMM26"), (511, 0, "ZMM26"), false),
    X86Descriptor::new("ZMM27", "zmm27", (511, 0, "ZMM27"), (511, 0, "ZMM27"), false),
    X86Descriptor::new("ZMM28", "zmm28", (511, 0, "ZMM28"), (511, 0, "ZMM28"), false),
    X86Descriptor::new("ZMM29", "zmm29", (511, 0, "ZMM29"), (511, 0, "ZMM29"), false),
    X86Descriptor::new("ZMM30", "zmm30", (511, 0, "ZMM30"), (511, 0, "ZMM30"), false),
    X86Descriptor::new("ZMM31", "zmm31", (511, 0, "ZMM31"), (511, 0, "ZMM31"), false),
    X86Descriptor::new("CR0", "cr0", (63, 0, "CR0"), (31, 0, "CR0"), true),
    X86Descriptor::new("CR1", "cr1", (63, 0, "CR1"), (31, 0, "CR1"), true),
    X86Descriptor::new("CR2", "cr2", (63, 0, "CR2"), (31, 0, "CR2"), true),
    X86Descriptor::new("CR3", "cr3", (63, 0, "CR3"), (31, 0, "CR3"), true),
    X86Descriptor::new("CR4", "cr4", (63, 0, "CR4"), (31, 0, "CR4"), true),
    X86Descriptor::new("CR5", "cr5", (63, 0, "CR5"), (31, 0, "CR5"), true),
    X86Descriptor::new("CR6", "cr6", (63, 0, "CR6"), (31, 0, "CR6"), true),
    X86Descriptor::new("CR7", "cr7", (63, 0, "CR7"), (31, 0, "CR7"), true),
    X86Descriptor::new("CR8", "cr8", (63, 0, "CR8"), (31, 0, "CR8"), false),
    X86Descriptor::new("CR9", "cr9", (63, 0, "CR9"), (31, 0, "CR9"), false),
    X86Descriptor::new("CR10", "cr10", (63, 0, "CR10"), (31, 0, "CR10"), false),
    X86Descriptor::new("CR11", "cr11", (63, 0, "CR11"), (31, 0, "CR11"), false),
    X86Descriptor::new("CR12", "cr12", (63, 0, "CR12"), (31, 0, "CR12"), false),
    X86Descriptor::new("CR13", "cr13", (63, 0, "CR13"), (31, 0, "CR13"), false),
    X86Descriptor::new("CR14", "cr14", (63, 0, "CR14"), (31, 0, "CR14"), false),
    X86Descriptor::new("CR15", "cr15", (63, 0, "CR15"), (31, 0, "CR15"), false),
    X86Descriptor::new("DR0", "dr0", (63, 0, "DR0"), (31, 0, "DR0"), true),
    X86Descriptor::new("DR1", "dr1", (63, 0, "DR1"), (31, 0, "DR1"), true),
    X86Descriptor::new("DR2", "dr2", (63, 0, "DR2"), (31, 0, "DR2"), true),
    X86Descriptor::new("DR3", "dr3", (63, 0, "DR3"), (31, 0, "DR3"), true),
    X86Descriptor::new("DR4", "dr4", (63, 0, "DR4"), (31, 0, "DR4"), true),
    X86Descriptor::new("DR5", "dr5", (63, 0, "DR5"), (31, 0, "DR5"), true),
    X86Descriptor::new("DR6", "dr6", (63, 0, "DR6"), (31, 0, "DR6"), true),
    X86Descriptor::new("DR7", "dr7", (63, 0, "DR7"), (31, 0, "DR7"), true),
    X86Descriptor::new("CS", "cs", (63, 0, "CS"), (31, 0, "CS"), true),
    X86Descriptor::new("DS", "ds", (63, 0, "DS"), (31, 0, "DS"), true),
    X86Descriptor::new("ES", "es", (63, 0, "ES"), (31, 0, "ES"), true),
    X86Descriptor::new("FS", "fs", (63, 0, "FS"), (31, 0, "FS"), true),
    X86Descriptor::new("GS", "gs", (63, 0, "GS"), (31, 0, "GS"), true),
    X86Descriptor::new("SS", "ss", (63, 0, "SS"), (31, 0, "SS"), true),
    X86Descriptor::new("EFER", "efer", (63, 0, "EFER"), (63, 0, "EFER"), false),
    X86Descriptor::new("TSC", "tsc", (63, 0, "TSC"), (63, 0, "TSC"), true),
];

/// Flag and control-word fields the disassembler does not model.
pub static PSEUDO_REGISTERS: [X86Descriptor; 63] = [
    X86Descriptor::pseudo("AC", "ac", (0, 0, "AC"), (0, 0, "AC"), true),
    X86Descriptor::pseudo("AF", "af", (0, 0, "AF"), (0, 0, "AF"), true),
    X86Descriptor::pseudo("CF", "cf", (0, 0, "CF"), (0, 0, "CF"), true),
    X86Descriptor::pseudo("DF", "df", (0, 0, "DF"), (0, 0, "DF"), true),
    X86Descriptor::pseudo("ID", "id", (0, 0, "ID"), (0, 0, "ID"), true),
    X86Descriptor::pseudo("IF", "if", (0, 0, "IF"), (0, 0, "IF"), true),
    X86Descriptor::pseudo("NT", "nt", (0, 0, "NT"), (0, 0, "NT"), true),
    X86Descriptor::pseudo("OF", "of", (0, 0, "OF"), (0, 0, "OF"), true),
    X86Descriptor::pseudo("PF", "pf", (0, 0, "PF"), (0, 0, "PF"), true),
    X86Descriptor::pseudo("RF", "rf", (0, 0, "RF"), (0, 0, "RF"), true),
    X86Descriptor::pseudo("SF", "sf", (0, 0, "SF"), (0, 0, "SF"), true),
    X86Descriptor::pseudo("TF", "tf", (0, 0, "TF"), (0, 0, "TF"), true),
    X86Descriptor::pseudo("VIF", "vif", (0, 0, "VIF"), (0, 0, "VIF"), true),
    X86Descriptor::pseudo("VIP", "vip", (0, 0, "VIP"), (0, 0, "VIP"), true),
    X86Descriptor::pseudo("VM", "vm", (0, 0, "VM"), (0, 0, "VM"), true),
    X86Descriptor::pseudo("ZF", "zf", (0, 0, "ZF"), (0, 0, "ZF"), true),
    X86Descriptor::pseudo("SSE_IE", "sse_ie", (0, 0, "SSE_IE"), (0, 0, "SSE_IE"), true),
    X86Descriptor::pseudo("SSE_DE", "sse_de", (0, 0, "SSE_DE"), (0, 0, "SSE_DE"), true),
    X86Descriptor::pseudo("SSE_ZE", "sse_ze", (0, 0, "SSE_ZE"), (0, 0, "SSE_ZE"), true),
    X86Descriptor::pseudo("SSE_OE", "sse_oe", (0, 0, "SSE_OE"), (0, 0, "SSE_OE"), true),
    X86Descriptor::pseudo("SSE_UE", "sse_ue", (0, 0, "SSE_UE"), (0, 0, "SSE_UE"), true),
    X86Descriptor::pseudo("SSE_PE", "sse_pe", (0, 0, "SSE_PE"), (0, 0, "SSE_PE"), true),
    X86Descriptor::pseudo("SSE_DAZ", "sse_daz", (0, 0, "SSE_DAZ"), (0, 0, "SSE_DAZ"), true),
    X86Descriptor::pseudo("SSE_IM", "sse_im", (0, 0, "SSE_IM"), (0, 0, "SSE_IM"), true),
    X86Descriptor::pseudo("SSE_DM", "sse_dm", (0, 0, "SSE_DM"), (0, 0, "SSE_DM"), true),
    X86Descriptor::pseudo("SSE_ZM", "sse_zm", (0, 0, "SSE_ZM"), (0, 0, "SSE_ZM"), true),
    X86Descriptor::pseudo("SSE_OM", "sse_om", (0, 0, "SSE_OM"), (0, 0, "SSE_OM"), true),
    X86Descriptor::pseudo("SSE_UM", "sse_um", (0, 0, "SSE_UM"), (0, 0, "SSE_UM"), true),
    X86Descriptor::pseudo("SSE_PM", "sse_pm", (0, 0, "SSE_PM"), (0, 0, "SSE_PM"), true),
    X86Descriptor::pseudo("SSE_RL", "sse_rl", (0, 0, "SSE_RL"), (0, 0, "SSE_RL"), true),
    X86Descriptor::pseudo("SSE_RH", "sse_rh", (0, 0, "SSE_RH"), (0, 0, "SSE_RH"), true),
    X86Descriptor::pseudo("SSE_FZ", "sse_fz", (0, 0, "SSE_FZ"), (0, 0, "SSE_FZ"), true),
    X86Descriptor::pseudo("FSW_IE", "fsw_ie", (0, 0, "FSW_IE"), (0, 0, "FSW_IE"), true),
    X86Descriptor::pseudo("FSW_DE", "fsw_de", (0, 0, "FSW_DE"), (0, 0, "FSW_DE"), true),
    X86Descriptor::pseudo("FSW_ZE", "fsw_ze", (0, 0, "FSW_ZE"), (0, 0, "FSW_ZE"), true),
    X86Descriptor::pseudo("FSW_OE", "fsw_oe", (0, 0, "FSW_OE"), (0, 0, "FSW_OE"), true),
    X86Descriptor::pseudo("FSW_UE", "fsw_ue", (0, 0, "FSW_UE"), (0, 0, "FSW_UE"), true),
    X86Descriptor::pseudo("FSW_PE", "fsw_pe", (0, 0, "FSW_PE"), (0, 0, "FSW_PE"), true),
    X86Descriptor::pseudo("FSW_SF", "fsw_sf", (0, 0, "FSW_SF"), (0, 0, "FSW_SF"), true),
    X86Descriptor::pseudo("FSW_ES", "fsw_es", (0, 0, "FSW_ES"), (0, 0, "FSW_ES"), true),
    X86Descriptor::pseudo("FSW_C0", "fsw_c0", (0, 0, "FSW_C0"), (0, 0, "FSW_C0"), true),
    X86Descriptor::pseudo("FSW_C1", "fsw_c1", (0, 0, "FSW_C1"), (0, 0, "FSW_C1"), true),
    X86Descriptor::pseudo("FSW_C2", "fsw_c2", (0, 0, "FSW_C2"), (0, 0, "FSW_C2"), true),
    X86Descriptor::pseudo("FSW_TOP", "fsw_top", (13, 11, "FSW_TOP"), (13, 11, "FSW_TOP"), true),
    X86Descriptor::pseudo("FSW_C3", "fsw_c3", (0, 0, "FSW_C3"), (0, 0, "FSW_C3"), true),
    X86Descriptor::pseudo("FSW_B", "fsw_b", (0, 0, "FSW_B"), (0, 0, "FSW_B"), true),
    X86Descriptor::pseudo("FCW_IM", "fcw_im", (0, 0, "FCW_IM"), (0, 0, "FCW_IM"), true),
    X86Descriptor::pseudo("FCW_DM", "fcw_dm", (0, 0, "FCW_DM"), (0, 0, "FCW_DM"), true),
    X86Descriptor::pseudo("FCW_ZM", "fcw_zm", (0, 0, "FCW_ZM"), (0, 0, "FCW_ZM"), true),
    X86Descriptor::pseudo("FCW_OM", "fcw_om", (0, 0, "FCW_OM"), (0, 0, "FCW_OM"), true),
    X86Descriptor::pseudo("FCW_UM", "fcw_um", (0, 0, "FCW_UM"), (0, 0, "FCW_UM"), true),
    X86Descriptor::pseudo("FCW_PM", "fcw_pm", (0, 0, "FCW_PM"), (0, 0, "FCW_PM"), true),
    X86Descriptor::pseudo("FCW_PC", "fcw_pc", (9, 8, "FCW_PC"), (9, 8, "FCW_PC"), true),
    X86Descriptor::pseudo("FCW_RC", "fcw_rc", (11, 10, "FCW_RC"), (11, 10, "FCW_RC"), true),
    X86Descriptor::pseudo("FCW_X", "fcw_x", (0, 0, "FCW_X"), (0, 0, "FCW_X"), true),
    X86Descriptor::pseudo("EFER_SCE", "efer_sce", (0, 0, "EFER_SCE"), (0, 0, "EFER_SCE"), false),
    X86Descriptor::pseudo("EFER_LME", "efer_lme", (0, 0, "EFER_LME"), (0, 0, "EFER_LME"), false),
    X86Descriptor::pseudo("EFER_LMA", "efer_lma", (0, 0, "EFER_LMA"), (0, 0, "EFER_LMA"), false),
    X86Descriptor::pseudo("EFER_NXE", "efer_nxe", (0, 0, "EFER_NXE"), (0, 0, "EFER_NXE"), false),
    X86Descriptor::pseudo(
        "EFER_SVME",
        "efer_svme",
        (0, 0, "EFER_SVME"),
        (0, 0, "EFER_SVME"),
        false,
    ),
    X86Descriptor::pseudo(
        "EFER_LMSLE",
        "efer_lmsle",
        (0, 0, "EFER_LMSLE"),
        (0, 0, "EFER_LMSLE"),
        false,
    ),
    X86Descriptor::pseudo(
        "EFER_FFXSR",
        "efer_ffxsr",
        (0, 0, "EFER_FFXSR"),
        (0, 0, "EFER_FFXSR"),
        false,
    ),
    X86Descriptor::pseudo("EFER_TCE", "efer_tce", (0, 0, "EFER_TCE"), (0, 0, "EFER_TCE"), false),
];

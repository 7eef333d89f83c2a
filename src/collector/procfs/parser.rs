//! Parsers for `/proc` and `/sys` files.
//!
//! These are pure functions that parse the content of kernel-exposed files
//! into structured data. They are designed to be easily testable with string inputs.

use crate::model::CpuCore;

/// Number of space-separated fields in `/proc/[pid]/stat`.
pub const PROC_STAT_FIELDS: usize = 52;

/// What went wrong while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Content had the wrong shape.
    Format,
    /// A numeric value could not be converted.
    Number,
}

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
}

impl ParseError {
    /// Creates a numeric conversion error.
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            kind: ParseErrorKind::Number,
            message: msg.into(),
        }
    }

    /// Creates a shape mismatch error.
    pub fn format(msg: impl Into<String>) -> Self {
        Self {
            kind: ParseErrorKind::Format,
            message: msg.into(),
        }
    }

    pub fn is_format(&self) -> bool {
        self.kind == ParseErrorKind::Format
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Fields of a `/proc/cpuinfo` core block that [`parse_cpuinfo`] keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CpuInfoField {
    Processor,
    VendorId,
    CpuFamily,
    Model,
    ModelName,
    Stepping,
    Microcode,
    CpuMhz,
    CacheSize,
    PhysicalId,
    Siblings,
    CoreId,
    CpuCores,
    ApicId,
    InitialApicId,
    Fpu,
    FpuException,
    CpuidLevel,
    Wp,
    Flags,
    VmxFlags,
    Bugs,
    Bogomips,
    ClflushSize,
    CacheAlignment,
    AddressSizes,
    PowerManagement,
}

/// Exact label text to field. Labels are compared after trimming, so
/// `model` and `model name` can no longer be confused.
const CPUINFO_LABELS: &[(&str, CpuInfoField)] = &[
    ("processor", CpuInfoField::Processor),
    ("vendor_id", CpuInfoField::VendorId),
    ("cpu family", CpuInfoField::CpuFamily),
    ("model", CpuInfoField::Model),
    ("model name", CpuInfoField::ModelName),
    ("stepping", CpuInfoField::Stepping),
    ("microcode", CpuInfoField::Microcode),
    ("cpu MHz", CpuInfoField::CpuMhz),
    ("cache size", CpuInfoField::CacheSize),
    ("physical id", CpuInfoField::PhysicalId),
    ("siblings", CpuInfoField::Siblings),
    ("core id", CpuInfoField::CoreId),
    ("cpu cores", CpuInfoField::CpuCores),
    ("apicid", CpuInfoField::ApicId),
    ("initial apicid", CpuInfoField::InitialApicId),
    ("fpu", CpuInfoField::Fpu),
    ("fpu_exception", CpuInfoField::FpuException),
    ("cpuid level", CpuInfoField::CpuidLevel),
    ("wp", CpuInfoField::Wp),
    ("flags", CpuInfoField::Flags),
    ("vmx flags", CpuInfoField::VmxFlags),
    ("bugs", CpuInfoField::Bugs),
    ("bogomips", CpuInfoField::Bogomips),
    ("clflush size", CpuInfoField::ClflushSize),
    ("cache_alignment", CpuInfoField::CacheAlignment),
    ("address sizes", CpuInfoField::AddressSizes),
    ("power management", CpuInfoField::PowerManagement),
    // arm64 spellings
    ("BogoMIPS", CpuInfoField::Bogomips),
    ("Features", CpuInfoField::Flags),
];

fn lookup_label(label: &str) -> Option<CpuInfoField> {
    CPUINFO_LABELS
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, field)| *field)
}

fn set_field(core: &mut CpuCore, field: CpuInfoField, value: &str) -> Result<(), ParseError> {
    let slot = match field {
        CpuInfoField::CpuMhz => {
            core.cpu_mhz = value
                .parse()
                .map_err(|_| ParseError::new(format!("invalid cpu MHz '{}'", value)))?;
            return Ok(());
        }
        CpuInfoField::Processor => &mut core.processor,
        CpuInfoField::VendorId => &mut core.vendor_id,
        CpuInfoField::CpuFamily => &mut core.cpu_family,
        CpuInfoField::Model => &mut core.model,
        CpuInfoField::ModelName => &mut core.model_name,
        CpuInfoField::Stepping => &mut core.stepping,
        CpuInfoField::Microcode => &mut core.microcode,
        CpuInfoField::CacheSize => &mut core.cache_size,
        CpuInfoField::PhysicalId => &mut core.physical_id,
        CpuInfoField::Siblings => &mut core.siblings,
        CpuInfoField::CoreId => &mut core.core_id,
        CpuInfoField::CpuCores => &mut core.cpu_cores,
        CpuInfoField::ApicId => &mut core.apicid,
        CpuInfoField::InitialApicId => &mut core.initial_apicid,
        CpuInfoField::Fpu => &mut core.fpu,
        CpuInfoField::FpuException => &mut core.fpu_exception,
        CpuInfoField::CpuidLevel => &mut core.cpuid_level,
        CpuInfoField::Wp => &mut core.wp,
        CpuInfoField::Flags => &mut core.flags,
        CpuInfoField::VmxFlags => &mut core.vmx_flags,
        CpuInfoField::Bugs => &mut core.bugs,
        CpuInfoField::Bogomips => &mut core.bogomips,
        CpuInfoField::ClflushSize => &mut core.clflush_size,
        CpuInfoField::CacheAlignment => &mut core.cache_alignment,
        CpuInfoField::AddressSizes => &mut core.address_sizes,
        CpuInfoField::PowerManagement => &mut core.power_management,
    };
    *slot = value.to_string();
    Ok(())
}

/// Parses `/proc/cpuinfo` content into one record per logical core.
///
/// Blocks of `label: value` rows are separated by blank rows. Blocks with no
/// rows at all (trailing or repeated blank lines) are skipped, so N core
/// blocks always produce N records. A final block without a terminating
/// blank row is still emitted.
pub fn parse_cpuinfo(content: &str) -> Result<Vec<CpuCore>, ParseError> {
    let mut cores = Vec::new();
    let mut current = CpuCore::default();
    let mut rows_in_block = 0usize;

    for (lineno, row) in content.split('\n').enumerate() {
        if row.is_empty() {
            if rows_in_block > 0 {
                cores.push(std::mem::take(&mut current));
                rows_in_block = 0;
            }
            continue;
        }

        let (label, value) = row.split_once(':').ok_or_else(|| {
            ParseError::format(format!("line {}: missing ':' in '{}'", lineno + 1, row))
        })?;
        rows_in_block += 1;

        if let Some(field) = lookup_label(label.trim()) {
            set_field(&mut current, field, value.trim())?;
        }
    }

    if rows_in_block > 0 {
        cores.push(current);
    }

    Ok(cores)
}

/// Parses the `scaling_max_freq` scalar (kHz) and returns MHz.
pub fn parse_max_freq(content: &str) -> Result<f32, ParseError> {
    let khz: f32 = content
        .trim()
        .parse()
        .map_err(|_| ParseError::new(format!("invalid max frequency '{}'", content.trim())))?;
    Ok(khz / 1000.0)
}

/// Accounting fields from `/proc/[pid]/stat`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcStat {
    pub name: String,
    pub utime: i64,
    pub stime: i64,
}

/// Parses `/proc/[pid]/stat` content.
///
/// The content is split on single spaces and must produce exactly
/// [`PROC_STAT_FIELDS`] fields. Field 2 is the name wrapped in parentheses,
/// fields 14 and 15 are user and system time in clock ticks.
pub fn parse_proc_stat(content: &str) -> Result<ProcStat, ParseError> {
    let fields: Vec<&str> = content.split(' ').collect();
    if fields.len() != PROC_STAT_FIELDS {
        return Err(ParseError::format(format!(
            "expected {} fields, got {}",
            PROC_STAT_FIELDS,
            fields.len()
        )));
    }

    let name = fields[1]
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| ParseError::format(format!("name '{}' is not parenthesized", fields[1])))?;

    let parse_ticks = |idx: usize, label: &str| -> Result<i64, ParseError> {
        fields[idx]
            .parse()
            .map_err(|_| ParseError::new(format!("invalid {} '{}'", label, fields[idx])))
    };

    Ok(ProcStat {
        name: name.to_string(),
        utime: parse_ticks(13, "utime")?,
        stime: parse_ticks(14, "stime")?,
    })
}

/// Returns the PID encoded in a `/proc` entry name.
///
/// Only names made entirely of ASCII digits that denote a strictly positive
/// integer qualify.
pub fn parse_pid_dir_name(name: &str) -> Option<u32> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse().ok().filter(|pid| *pid > 0)
}

/// Parses a single integer printed by the memory reporting command.
pub fn parse_megabytes(output: &str) -> Result<i64, ParseError> {
    let trimmed = output.trim();
    trimmed
        .parse()
        .map_err(|_| ParseError::new(format!("expected an integer, got '{}'", trimmed)))
}

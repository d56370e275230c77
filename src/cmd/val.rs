use super::Error;

type Result<T> = std::result::Result<T, Error>;

/// The closed set of variable names recognized by `set`. Case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Byte,
    Int16,
    Int32,
    Int64,
    UInt16,
    UInt32,
    UInt64,
    Single,
    Double,
    IntPtr,
}

impl Kind {
    pub const ALL: [Kind; 10] = [
        Kind::Byte,
        Kind::Int16,
        Kind::Int32,
        Kind::Int64,
        Kind::UInt16,
        Kind::UInt32,
        Kind::UInt64,
        Kind::Single,
        Kind::Double,
        Kind::IntPtr,
    ];

    pub fn from_name(name: &str) -> Option<Kind> {
        match name {
            "Byte" => Some(Kind::Byte),
            "Int16" => Some(Kind::Int16),
            "Int32" => Some(Kind::Int32),
            "Int64" => Some(Kind::Int64),
            "UInt16" => Some(Kind::UInt16),
            "UInt32" => Some(Kind::UInt32),
            "UInt64" => Some(Kind::UInt64),
            "Single" => Some(Kind::Single),
            "Double" => Some(Kind::Double),
            "IntPtr" => Some(Kind::IntPtr),
            _ => None,
        }
    }

    /// Parses a textual value for this kind. Signed kinds go through a
    /// 64-bit signed intermediate, unsigned kinds through a 64-bit unsigned
    /// one, floating kinds through a double; out-of-range values truncate
    /// to the declared width. `IntPtr` reads hexadecimal with or without a
    /// `0x` prefix.
    pub fn parse(self, text: &str) -> Result<Val> {
        let parsed = match self {
            Kind::Byte => text.parse::<i64>().ok().map(|n| Val::Byte(n as i8)),
            Kind::Int16 => text.parse::<i64>().ok().map(|n| Val::Int16(n as i16)),
            Kind::Int32 => text.parse::<i64>().ok().map(|n| Val::Int32(n as i32)),
            Kind::Int64 => text.parse::<i64>().ok().map(Val::Int64),
            Kind::UInt16 => text.parse::<u64>().ok().map(|n| Val::UInt16(n as u16)),
            Kind::UInt32 => text.parse::<u64>().ok().map(|n| Val::UInt32(n as u32)),
            Kind::UInt64 => text.parse::<u64>().ok().map(Val::UInt64),
            Kind::Single => text.parse::<f64>().ok().map(|n| Val::Single(n as f32)),
            Kind::Double => text.parse::<f64>().ok().map(Val::Double),
            Kind::IntPtr => {
                let digits = text
                    .strip_prefix("0x")
                    .or_else(|| text.strip_prefix("0X"))
                    .unwrap_or(text);
                u64::from_str_radix(digits, 16)
                    .ok()
                    .map(|n| Val::IntPtr(n as usize))
            }
        };
        parsed.ok_or_else(|| Error::BadValue(text.to_string(), self))
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Kind::Byte => "Byte",
            Kind::Int16 => "Int16",
            Kind::Int32 => "Int32",
            Kind::Int64 => "Int64",
            Kind::UInt16 => "UInt16",
            Kind::UInt32 => "UInt32",
            Kind::UInt64 => "UInt64",
            Kind::Single => "Single",
            Kind::Double => "Double",
            Kind::IntPtr => "IntPtr",
        };
        write!(f, "{}", name)
    }
}

/// One scalar value, carried with its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Val {
    Byte(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Single(f32),
    Double(f64),
    IntPtr(usize),
}

impl Val {
    pub fn kind(&self) -> Kind {
        match self {
            Val::Byte(_) => Kind::Byte,
            Val::Int16(_) => Kind::Int16,
            Val::Int32(_) => Kind::Int32,
            Val::Int64(_) => Kind::Int64,
            Val::UInt16(_) => Kind::UInt16,
            Val::UInt32(_) => Kind::UInt32,
            Val::UInt64(_) => Kind::UInt64,
            Val::Single(_) => Kind::Single,
            Val::Double(_) => Kind::Double,
            Val::IntPtr(_) => Kind::IntPtr,
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Byte(n) => write!(f, "{}", n),
            Val::Int16(n) => write!(f, "{}", n),
            Val::Int32(n) => write!(f, "{}", n),
            Val::Int64(n) => write!(f, "{}", n),
            Val::UInt16(n) => write!(f, "{}", n),
            Val::UInt32(n) => write!(f, "{}", n),
            Val::UInt64(n) => write!(f, "{}", n),
            Val::Single(n) => write!(f, "{}", n),
            Val::Double(n) => write!(f, "{}", n),
            Val::IntPtr(n) => write!(f, "{:#x}", n),
        }
    }
}

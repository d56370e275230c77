use super::{Address, Kind, Val};

/// ## Variable memory
///
/// The ten fixed slots an attached inspector reads and writes. Slots are
/// zero-initialized at construction and live until the table is dropped.
/// The storage sits behind a `Box` so the addresses handed out by
/// [`Vars::address`] stay valid even if the `Vars` handle itself moves.
#[derive(Debug, Default)]
pub struct Vars {
    slots: Box<Slots>,
}

#[derive(Debug, Default)]
struct Slots {
    byte: i8,
    int16: i16,
    int32: i32,
    int64: i64,
    uint16: u16,
    uint32: u32,
    uint64: u64,
    single: f32,
    double: f64,
    intptr: usize,
}

impl Vars {
    pub fn new() -> Vars {
        Vars::default()
    }

    pub fn fetch(&self, kind: Kind) -> Val {
        match kind {
            Kind::Byte => Val::Byte(self.slots.byte),
            Kind::Int16 => Val::Int16(self.slots.int16),
            Kind::Int32 => Val::Int32(self.slots.int32),
            Kind::Int64 => Val::Int64(self.slots.int64),
            Kind::UInt16 => Val::UInt16(self.slots.uint16),
            Kind::UInt32 => Val::UInt32(self.slots.uint32),
            Kind::UInt64 => Val::UInt64(self.slots.uint64),
            Kind::Single => Val::Single(self.slots.single),
            Kind::Double => Val::Double(self.slots.double),
            Kind::IntPtr => Val::IntPtr(self.slots.intptr),
        }
    }

    pub fn store(&mut self, value: Val) {
        match value {
            Val::Byte(n) => self.slots.byte = n,
            Val::Int16(n) => self.slots.int16 = n,
            Val::Int32(n) => self.slots.int32 = n,
            Val::Int64(n) => self.slots.int64 = n,
            Val::UInt16(n) => self.slots.uint16 = n,
            Val::UInt32(n) => self.slots.uint32 = n,
            Val::UInt64(n) => self.slots.uint64 = n,
            Val::Single(n) => self.slots.single = n,
            Val::Double(n) => self.slots.double = n,
            Val::IntPtr(n) => self.slots.intptr = n,
        }
    }

    pub fn address(&self, kind: Kind) -> Address {
        match kind {
            Kind::Byte => &self.slots.byte as *const i8 as Address,
            Kind::Int16 => &self.slots.int16 as *const i16 as Address,
            Kind::Int32 => &self.slots.int32 as *const i32 as Address,
            Kind::Int64 => &self.slots.int64 as *const i64 as Address,
            Kind::UInt16 => &self.slots.uint16 as *const u16 as Address,
            Kind::UInt32 => &self.slots.uint32 as *const u32 as Address,
            Kind::UInt64 => &self.slots.uint64 as *const u64 as Address,
            Kind::Single => &self.slots.single as *const f32 as Address,
            Kind::Double => &self.slots.double as *const f64 as Address,
            Kind::IntPtr => &self.slots.intptr as *const usize as Address,
        }
    }

    /// Predefined constants for exercising the reading side of an
    /// attached inspector.
    pub fn set_test_values(&mut self) {
        self.slots.byte = 10;
        self.slots.int16 = 11;
        self.slots.int32 = 12;
        self.slots.int64 = 13;
        self.slots.uint16 = 14;
        self.slots.uint32 = 15;
        self.slots.uint64 = 16;
        self.slots.single = 17.17;
        self.slots.double = 18.18;
        self.slots.intptr = 0xAABB_CCDD;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_do_not_alias() {
        let vars = Vars::new();
        let mut addrs: Vec<Address> = Kind::ALL.iter().map(|k| vars.address(*k)).collect();
        addrs.sort_unstable();
        addrs.dedup();
        assert_eq!(addrs.len(), Kind::ALL.len());
    }

    #[test]
    fn addresses_survive_moves() {
        let vars = Vars::new();
        let addr = vars.address(Kind::Double);
        let moved = vars;
        assert_eq!(moved.address(Kind::Double), addr);
    }

    #[test]
    fn store_replaces_only_the_matching_slot() {
        let mut vars = Vars::new();
        vars.set_test_values();
        vars.store(Val::Int32(-7));
        assert_eq!(vars.fetch(Kind::Int32), Val::Int32(-7));
        assert_eq!(vars.fetch(Kind::Int16), Val::Int16(11));
        assert_eq!(vars.fetch(Kind::UInt32), Val::UInt32(15));
    }
}

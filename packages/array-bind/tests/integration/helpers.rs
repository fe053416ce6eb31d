//! Shared record declarations for integration tests.

use array_bind::array_record;

array_record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Sample {
        pub a: String = "[0]",
        pub c: i64 = "[1]",
        pub b: bool = "[2]",
    }
}

array_record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct OmitSample {
        pub a: String = "[0]",
        pub b: bool = "[100] ,omitempty",
    }
}

array_record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct FailedSample {
        pub a: String = "[0]",
        pub b: Sample = "[2]",
    }
}

array_record! {
    /// One row of a sensor export, covering every scalar width.
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct WideRow {
        pub id: u64 = "[0]",
        pub station: String = "[1]",
        pub active: bool = "[2]",
        pub delta: i8 = "[3]",
        pub offset: i16 = "[4]",
        pub count: i32 = "[5]",
        pub total: i64 = "[6]",
        pub shift: isize = "[7]",
        pub level: u8 = "[8]",
        pub port: u16 = "[9]",
        pub mask: u32 = "[10]",
        pub slot: usize = "[11]",
        pub ratio: f32 = "[12]",
        pub reading: f64 = "[13]",
        pub comment: String,
    }
}

pub fn wide_row_input() -> Vec<String> {
    [
        "9000000000",
        "north-7",
        "true",
        "-12",
        "-3000",
        "123456",
        "-9000000000",
        "-5",
        "200",
        "8080",
        "4294967295",
        "17",
        "0.5",
        "-273.15",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

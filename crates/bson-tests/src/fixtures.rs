//! Canonical documents used across the integration tests, benches and
//! fuzz seeds.
//!
//! The first fourteen are the reference documents every BSON decoder is
//! checked against. Each expected element lists the full value range
//! the reader must produce, length prefixes included.

use crate::{Expected, Fixture};

/// `{"int": 1}`
pub const INT32: Fixture = Fixture {
    name: "int32",
    bytes: &[
        0x0e, 0x00, 0x00, 0x00, 0x10, 0x69, 0x6e, 0x74, 0x00, 0x01, 0x00, 0x00,
        0x00, 0x00,
    ],
    expected: &[
        Expected {
            tag: 0x10,
            name: b"int\0",
            value: &[
                0x01, 0x00, 0x00, 0x00,
            ],
        },
    ],
};

/// `{"int64": 1}`
pub const INT64: Fixture = Fixture {
    name: "int64",
    bytes: &[
        0x14, 0x00, 0x00, 0x00, 0x12, 0x69, 0x6e, 0x74, 0x36, 0x34, 0x00, 0x01,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    expected: &[
        Expected {
            tag: 0x12,
            name: b"int64\0",
            value: &[
                0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            ],
        },
    ],
};

/// `{"double": 1.1}`
pub const DOUBLE: Fixture = Fixture {
    name: "double",
    bytes: &[
        0x15, 0x00, 0x00, 0x00, 0x01, 0x64, 0x6f, 0x75, 0x62, 0x6c, 0x65, 0x00,
        0x2b, 0x87, 0x16, 0xd9, 0xce, 0xf7, 0xf1, 0x3f, 0x00,
    ],
    expected: &[
        Expected {
            tag: 0x01,
            name: b"double\0",
            value: &[
                0x2b, 0x87, 0x16, 0xd9, 0xce, 0xf7, 0xf1, 0x3f,
            ],
        },
    ],
};

/// `{"utc": <datetime>}`
pub const UTC_DATETIME: Fixture = Fixture {
    name: "utc_datetime",
    bytes: &[
        0x12, 0x00, 0x00, 0x00, 0x09, 0x75, 0x74, 0x63, 0x00, 0x0b, 0x98, 0x8c,
        0x2b, 0x33, 0x01, 0x00, 0x00, 0x00,
    ],
    expected: &[
        Expected {
            tag: 0x09,
            name: b"utc\0",
            value: &[
                0x0b, 0x98, 0x8c, 0x2b, 0x33, 0x01, 0x00, 0x00,
            ],
        },
    ],
};

/// `{"string": "some string"}`
pub const STRING: Fixture = Fixture {
    name: "string",
    bytes: &[
        0x1d, 0x00, 0x00, 0x00, 0x02, 0x73, 0x74, 0x72, 0x69, 0x6e, 0x67, 0x00,
        0x0c, 0x00, 0x00, 0x00, 0x73, 0x6f, 0x6d, 0x65, 0x20, 0x73, 0x74, 0x72,
        0x69, 0x6e, 0x67, 0x00, 0x00,
    ],
    expected: &[
        Expected {
            tag: 0x02,
            name: b"string\0",
            value: &[
                0x0c, 0x00, 0x00, 0x00, 0x73, 0x6f, 0x6d, 0x65, 0x20, 0x73, 0x74, 0x72,
                0x69, 0x6e, 0x67, 0x00,
            ],
        },
    ],
};

/// `{"array[int]": [1, 2, 3, 4, 5, 6]}`
pub const INT_ARRAY: Fixture = Fixture {
    name: "int_array",
    bytes: &[
        0x40, 0x00, 0x00, 0x00, 0x04, 0x61, 0x72, 0x72, 0x61, 0x79, 0x5b, 0x69,
        0x6e, 0x74, 0x5d, 0x00, 0x2f, 0x00, 0x00, 0x00, 0x10, 0x30, 0x00, 0x01,
        0x00, 0x00, 0x00, 0x10, 0x31, 0x00, 0x02, 0x00, 0x00, 0x00, 0x10, 0x32,
        0x00, 0x03, 0x00, 0x00, 0x00, 0x10, 0x33, 0x00, 0x04, 0x00, 0x00, 0x00,
        0x10, 0x34, 0x00, 0x05, 0x00, 0x00, 0x00, 0x10, 0x35, 0x00, 0x06, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    expected: &[
        Expected {
            tag: 0x04,
            name: b"array[int]\0",
            value: &[
                0x2f, 0x00, 0x00, 0x00, 0x10, 0x30, 0x00, 0x01, 0x00, 0x00, 0x00, 0x10,
                0x31, 0x00, 0x02, 0x00, 0x00, 0x00, 0x10, 0x32, 0x00, 0x03, 0x00, 0x00,
                0x00, 0x10, 0x33, 0x00, 0x04, 0x00, 0x00, 0x00, 0x10, 0x34, 0x00, 0x05,
                0x00, 0x00, 0x00, 0x10, 0x35, 0x00, 0x06, 0x00, 0x00, 0x00, 0x00,
            ],
        },
    ],
};

/// `{"array[double]": [1.1, 2.2]}`
pub const DOUBLE_ARRAY: Fixture = Fixture {
    name: "double_array",
    bytes: &[
        0x2f, 0x00, 0x00, 0x00, 0x04, 0x61, 0x72, 0x72, 0x61, 0x79, 0x5b, 0x64,
        0x6f, 0x75, 0x62, 0x6c, 0x65, 0x5d, 0x00, 0x1b, 0x00, 0x00, 0x00, 0x01,
        0x30, 0x00, 0x2b, 0x87, 0x16, 0xd9, 0xce, 0xf7, 0xf1, 0x3f, 0x01, 0x31,
        0x00, 0x96, 0x43, 0x8b, 0x6c, 0xe7, 0xfb, 0x00, 0x40, 0x00, 0x00,
    ],
    expected: &[
        Expected {
            tag: 0x04,
            name: b"array[double]\0",
            value: &[
                0x1b, 0x00, 0x00, 0x00, 0x01, 0x30, 0x00, 0x2b, 0x87, 0x16, 0xd9, 0xce,
                0xf7, 0xf1, 0x3f, 0x01, 0x31, 0x00, 0x96, 0x43, 0x8b, 0x6c, 0xe7, 0xfb,
                0x00, 0x40, 0x00,
            ],
        },
    ],
};

/// `{"document": {"int": 1}}`
pub const EMBEDDED_DOCUMENT: Fixture = Fixture {
    name: "embedded_document",
    bytes: &[
        0x1d, 0x00, 0x00, 0x00, 0x03, 0x64, 0x6f, 0x63, 0x75, 0x6d, 0x65, 0x6e,
        0x74, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x10, 0x69, 0x6e, 0x74, 0x00, 0x01,
        0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    expected: &[
        Expected {
            tag: 0x03,
            name: b"document\0",
            value: &[
                0x0e, 0x00, 0x00, 0x00, 0x10, 0x69, 0x6e, 0x74, 0x00, 0x01, 0x00, 0x00,
                0x00, 0x00,
            ],
        },
    ],
};

/// `{"null": null}`
pub const NULL: Fixture = Fixture {
    name: "null",
    bytes: &[
        0x0b, 0x00, 0x00, 0x00, 0x0a, 0x6e, 0x75, 0x6c, 0x6c, 0x00, 0x00,
    ],
    expected: &[
        Expected {
            tag: 0x0a,
            name: b"null\0",
            value: &[],
        },
    ],
};

/// `{"regex": /1234/i}`
pub const REGEX: Fixture = Fixture {
    name: "regex",
    bytes: &[
        0x13, 0x00, 0x00, 0x00, 0x0b, 0x72, 0x65, 0x67, 0x65, 0x78, 0x00, 0x31,
        0x32, 0x33, 0x34, 0x00, 0x69, 0x00, 0x00,
    ],
    expected: &[
        Expected {
            tag: 0x0b,
            name: b"regex\0",
            value: &[
                0x31, 0x32, 0x33, 0x34, 0x00, 0x69, 0x00,
            ],
        },
    ],
};

/// `{"hello": "world"}`
pub const HELLO_WORLD: Fixture = Fixture {
    name: "hello_world",
    bytes: &[
        0x16, 0x00, 0x00, 0x00, 0x02, 0x68, 0x65, 0x6c, 0x6c, 0x6f, 0x00, 0x06,
        0x00, 0x00, 0x00, 0x77, 0x6f, 0x72, 0x6c, 0x64, 0x00, 0x00,
    ],
    expected: &[
        Expected {
            tag: 0x02,
            name: b"hello\0",
            value: &[
                0x06, 0x00, 0x00, 0x00, 0x77, 0x6f, 0x72, 0x6c, 0x64, 0x00,
            ],
        },
    ],
};

/// `{"BSON": ["awesome", 5.05, 1986]}`
pub const MIXED_ARRAY: Fixture = Fixture {
    name: "mixed_array",
    bytes: &[
        0x31, 0x00, 0x00, 0x00, 0x04, 0x42, 0x53, 0x4f, 0x4e, 0x00, 0x26, 0x00,
        0x00, 0x00, 0x02, 0x30, 0x00, 0x08, 0x00, 0x00, 0x00, 0x61, 0x77, 0x65,
        0x73, 0x6f, 0x6d, 0x65, 0x00, 0x01, 0x31, 0x00, 0x33, 0x33, 0x33, 0x33,
        0x33, 0x33, 0x14, 0x40, 0x10, 0x32, 0x00, 0xc2, 0x07, 0x00, 0x00, 0x00,
        0x00,
    ],
    expected: &[
        Expected {
            tag: 0x04,
            name: b"BSON\0",
            value: &[
                0x26, 0x00, 0x00, 0x00, 0x02, 0x30, 0x00, 0x08, 0x00, 0x00, 0x00, 0x61,
                0x77, 0x65, 0x73, 0x6f, 0x6d, 0x65, 0x00, 0x01, 0x31, 0x00, 0x33, 0x33,
                0x33, 0x33, 0x33, 0x33, 0x14, 0x40, 0x10, 0x32, 0x00, 0xc2, 0x07, 0x00,
                0x00, 0x00,
            ],
        },
    ],
};

/// `{"array[bool]": [true, false, true]}`
pub const BOOL_ARRAY: Fixture = Fixture {
    name: "bool_array",
    bytes: &[
        0x23, 0x00, 0x00, 0x00, 0x04, 0x61, 0x72, 0x72, 0x61, 0x79, 0x5b, 0x62,
        0x6f, 0x6f, 0x6c, 0x5d, 0x00, 0x11, 0x00, 0x00, 0x00, 0x08, 0x30, 0x00,
        0x01, 0x08, 0x31, 0x00, 0x00, 0x08, 0x32, 0x00, 0x01, 0x00, 0x00,
    ],
    expected: &[
        Expected {
            tag: 0x04,
            name: b"array[bool]\0",
            value: &[
                0x11, 0x00, 0x00, 0x00, 0x08, 0x30, 0x00, 0x01, 0x08, 0x31, 0x00, 0x00,
                0x08, 0x32, 0x00, 0x01, 0x00,
            ],
        },
    ],
};

/// `{"array[string]": ["hello", "world"]}`
pub const STRING_ARRAY: Fixture = Fixture {
    name: "string_array",
    bytes: &[
        0x33, 0x00, 0x00, 0x00, 0x04, 0x61, 0x72, 0x72, 0x61, 0x79, 0x5b, 0x73,
        0x74, 0x72, 0x69, 0x6e, 0x67, 0x5d, 0x00, 0x1f, 0x00, 0x00, 0x00, 0x02,
        0x30, 0x00, 0x06, 0x00, 0x00, 0x00, 0x68, 0x65, 0x6c, 0x6c, 0x6f, 0x00,
        0x02, 0x31, 0x00, 0x06, 0x00, 0x00, 0x00, 0x77, 0x6f, 0x72, 0x6c, 0x64,
        0x00, 0x00, 0x00,
    ],
    expected: &[
        Expected {
            tag: 0x04,
            name: b"array[string]\0",
            value: &[
                0x1f, 0x00, 0x00, 0x00, 0x02, 0x30, 0x00, 0x06, 0x00, 0x00, 0x00, 0x68,
                0x65, 0x6c, 0x6c, 0x6f, 0x00, 0x02, 0x31, 0x00, 0x06, 0x00, 0x00, 0x00,
                0x77, 0x6f, 0x72, 0x6c, 0x64, 0x00, 0x00,
            ],
        },
    ],
};

/// One element of each type beyond the core table.
pub const EXTENDED_TYPES: Fixture = Fixture {
    name: "extended_types",
    bytes: &[
        0xa8, 0x00, 0x00, 0x00, 0x05, 0x62, 0x69, 0x6e, 0x00, 0x03, 0x00, 0x00,
        0x00, 0x00, 0x01, 0x02, 0x03, 0x06, 0x75, 0x6e, 0x64, 0x65, 0x66, 0x00,
        0x07, 0x6f, 0x69, 0x64, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,
        0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0c, 0x64, 0x62, 0x72, 0x65, 0x66, 0x00,
        0x05, 0x00, 0x00, 0x00, 0x63, 0x6f, 0x6c, 0x6c, 0x00, 0xaa, 0xaa, 0xaa,
        0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0x0d, 0x63, 0x6f,
        0x64, 0x65, 0x00, 0x04, 0x00, 0x00, 0x00, 0x66, 0x28, 0x29, 0x00, 0x0e,
        0x73, 0x79, 0x6d, 0x00, 0x02, 0x00, 0x00, 0x00, 0x73, 0x00, 0x0f, 0x73,
        0x63, 0x6f, 0x70, 0x65, 0x64, 0x00, 0x16, 0x00, 0x00, 0x00, 0x02, 0x00,
        0x00, 0x00, 0x78, 0x00, 0x0c, 0x00, 0x00, 0x00, 0x10, 0x78, 0x00, 0x01,
        0x00, 0x00, 0x00, 0x00, 0x11, 0x74, 0x73, 0x00, 0x02, 0x00, 0x00, 0x00,
        0x01, 0x00, 0x00, 0x00, 0x13, 0x64, 0x65, 0x63, 0x00, 0x01, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40,
        0x30, 0x7f, 0x6d, 0x61, 0x78, 0x00, 0xff, 0x6d, 0x69, 0x6e, 0x00, 0x00,
    ],
    expected: &[
        Expected {
            tag: 0x05,
            name: b"bin\0",
            value: &[
                0x03, 0x00, 0x00, 0x00, 0x00, 0x01, 0x02, 0x03,
            ],
        },
        Expected {
            tag: 0x06,
            name: b"undef\0",
            value: &[],
        },
        Expected {
            tag: 0x07,
            name: b"oid\0",
            value: &[
                0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c,
            ],
        },
        Expected {
            tag: 0x0c,
            name: b"dbref\0",
            value: &[
                0x05, 0x00, 0x00, 0x00, 0x63, 0x6f, 0x6c, 0x6c, 0x00, 0xaa, 0xaa, 0xaa,
                0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa,
            ],
        },
        Expected {
            tag: 0x0d,
            name: b"code\0",
            value: &[
                0x04, 0x00, 0x00, 0x00, 0x66, 0x28, 0x29, 0x00,
            ],
        },
        Expected {
            tag: 0x0e,
            name: b"sym\0",
            value: &[
                0x02, 0x00, 0x00, 0x00, 0x73, 0x00,
            ],
        },
        Expected {
            tag: 0x0f,
            name: b"scoped\0",
            value: &[
                0x16, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x78, 0x00, 0x0c, 0x00,
                0x00, 0x00, 0x10, 0x78, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00,
            ],
        },
        Expected {
            tag: 0x11,
            name: b"ts\0",
            value: &[
                0x02, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00,
            ],
        },
        Expected {
            tag: 0x13,
            name: b"dec\0",
            value: &[
                0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                0x00, 0x00, 0x40, 0x30,
            ],
        },
        Expected {
            tag: 0x7f,
            name: b"max\0",
            value: &[],
        },
        Expected {
            tag: 0xff,
            name: b"min\0",
            value: &[],
        },
    ],
};

/// Every fixture, in a stable order.
pub const ALL: &[Fixture] = &[
    INT32,
    INT64,
    DOUBLE,
    UTC_DATETIME,
    STRING,
    INT_ARRAY,
    DOUBLE_ARRAY,
    EMBEDDED_DOCUMENT,
    NULL,
    REGEX,
    HELLO_WORLD,
    MIXED_ARRAY,
    BOOL_ARRAY,
    STRING_ARRAY,
    EXTENDED_TYPES,
];

//! Number format types

/// Number format of a cell
///
/// Only the format code is modeled; rendering values with it is left to the
/// spreadsheet application.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumberFormat {
    /// Built-in format by reserved id (0..=163)
    BuiltIn(u32),

    /// Custom format code
    Custom(String),
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::BuiltIn(Self::ID_GENERAL)
    }
}

/// Built-in ids with a fixed, locale-independent code.
const BUILTIN_CODES: &[(u32, &str)] = &[
    (0, "General"),
    (1, "0"),
    (2, "0.00"),
    (3, "#,##0"),
    (4, "#,##0.00"),
    (9, "0%"),
    (10, "0.00%"),
    (11, "0.00E+00"),
    (12, "# ?/?"),
    (13, "# ??/??"),
    (14, "mm-dd-yy"),
    (15, "d-mmm-yy"),
    (16, "d-mmm"),
    (17, "mmm-yy"),
    (18, "h:mm AM/PM"),
    (19, "h:mm:ss AM/PM"),
    (20, "h:mm"),
    (21, "h:mm:ss"),
    (22, "m/d/yy h:mm"),
    (37, "#,##0 ;(#,##0)"),
    (38, "#,##0 ;[Red](#,##0)"),
    (39, "#,##0.00;(#,##0.00)"),
    (40, "#,##0.00;[Red](#,##0.00)"),
    (45, "mm:ss"),
    (46, "[h]:mm:ss"),
    (47, "mmss.0"),
    (48, "##0.0E+0"),
    (49, "@"),
];

impl NumberFormat {
    /// Highest id reserved for built-in formats
    pub const MAX_BUILTIN_ID: u32 = 163;
    /// First id handed out to custom format codes
    pub const FIRST_CUSTOM_ID: u32 = 164;

    pub const ID_GENERAL: u32 = 0;
    pub const ID_NUMBER_DEC2: u32 = 2;
    pub const ID_PERCENT_DEC2: u32 = 10;
    pub const ID_DATE_SHORT: u32 = 14;
    pub const ID_TEXT: u32 = 49;

    /// Format for a code string; codes matching a built-in resolve to its id.
    pub fn from_code<S: AsRef<str> + Into<String>>(code: S) -> Self {
        match Self::builtin_id_for(code.as_ref()) {
            Some(id) => NumberFormat::BuiltIn(id),
            None => NumberFormat::Custom(code.into()),
        }
    }

    /// Built-in format by id
    ///
    /// Ids above [`NumberFormat::MAX_BUILTIN_ID`] belong to custom codes and
    /// are not built-in; see [`NumberFormat::is_reserved_id`].
    pub fn from_id(id: u32) -> Self {
        NumberFormat::BuiltIn(id)
    }

    /// Check whether `id` lies in the built-in range
    pub fn is_reserved_id(id: u32) -> bool {
        id <= Self::MAX_BUILTIN_ID
    }

    /// Reserved id of a built-in format, `None` for custom codes and for
    /// built-in ids outside the reserved range.
    pub fn builtin_id(&self) -> Option<u32> {
        match self {
            NumberFormat::BuiltIn(id) if Self::is_reserved_id(*id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_general(&self) -> bool {
        *self == NumberFormat::BuiltIn(Self::ID_GENERAL)
    }

    /// Format code, if one is known for this format
    ///
    /// Reserved ids without a fixed code (locale-dependent currency and
    /// East Asian date formats) return `None`.
    pub fn code(&self) -> Option<&str> {
        match self {
            NumberFormat::BuiltIn(id) => Self::builtin_code(*id),
            NumberFormat::Custom(s) => Some(s),
        }
    }

    /// Code for a built-in id
    pub fn builtin_code(id: u32) -> Option<&'static str> {
        BUILTIN_CODES
            .iter()
            .find(|(builtin, _)| *builtin == id)
            .map(|(_, code)| *code)
    }

    /// Built-in id for a code string
    pub fn builtin_id_for(code: &str) -> Option<u32> {
        BUILTIN_CODES
            .iter()
            .find(|(_, builtin)| *builtin == code)
            .map(|(id, _)| *id)
    }
}

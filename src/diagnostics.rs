//! Static diagnostic codes for compile-time configuration validation.
//!
//! A separate static-analysis component flags invalid connector
//! configuration (pool size bounds, timeout bounds, return-type
//! combinations) using this fixed table. Nothing here participates in
//! the runtime conversion contract.

use std::fmt;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The configuration is invalid.
    Error,
    /// The configuration is accepted but likely unintended.
    Hint,
}

/// Diagnostic codes reported by configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticCode {
    /// Connection pool max open connections below bound.
    Sql101,
    /// Connection pool max connection lifetime below bound.
    Sql102,
    /// Connection pool min idle connections below bound.
    Sql103,
    /// Oracle-specific option value below bound.
    OracleDb101,
    /// Out parameter return type is not a record or object.
    OracleDb201,
    /// Out parameter return type is not xml.
    OracleDb202,
    /// Query return data ignored without an explicit row type.
    OracleDb901,
    /// Call return data ignored without an explicit return type.
    OracleDb902,
    /// Out parameter data ignored without an explicit type descriptor.
    OracleDb903,
}

impl DiagnosticCode {
    /// All diagnostic codes, in code order.
    pub const ALL: [DiagnosticCode; 9] = [
        DiagnosticCode::Sql101,
        DiagnosticCode::Sql102,
        DiagnosticCode::Sql103,
        DiagnosticCode::OracleDb101,
        DiagnosticCode::OracleDb201,
        DiagnosticCode::OracleDb202,
        DiagnosticCode::OracleDb901,
        DiagnosticCode::OracleDb902,
        DiagnosticCode::OracleDb903,
    ];

    /// The diagnostic code string.
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticCode::Sql101 => "SQL_101",
            DiagnosticCode::Sql102 => "SQL_102",
            DiagnosticCode::Sql103 => "SQL_103",
            DiagnosticCode::OracleDb101 => "ORACLEDB_101",
            DiagnosticCode::OracleDb201 => "ORACLEDB_201",
            DiagnosticCode::OracleDb202 => "ORACLEDB_202",
            DiagnosticCode::OracleDb901 => "ORACLEDB_901",
            DiagnosticCode::OracleDb902 => "ORACLEDB_902",
            DiagnosticCode::OracleDb903 => "ORACLEDB_903",
        }
    }

    /// The human-readable message.
    pub fn message(&self) -> &'static str {
        match self {
            DiagnosticCode::Sql101 => "invalid value: expected value is greater than one",
            DiagnosticCode::Sql102 => "invalid value: expected value is greater than zero",
            DiagnosticCode::Sql103 => {
                "invalid value: expected value is greater than or equal to 30"
            }
            DiagnosticCode::OracleDb101 => {
                "invalid value: expected value is greater than or equal to zero"
            }
            DiagnosticCode::OracleDb201 => {
                "invalid value: expected value is either record or object"
            }
            DiagnosticCode::OracleDb202 => "invalid value: expected value is xml",
            DiagnosticCode::OracleDb901 => {
                "parameter 'rowType' should be explicitly passed when the return data is ignored"
            }
            DiagnosticCode::OracleDb902 => {
                "parameter 'returnType' should be explicitly passed when the return data is ignored"
            }
            DiagnosticCode::OracleDb903 => {
                "parameter 'typeDesc' should be explicitly passed when the return data is ignored"
            }
        }
    }

    /// The severity of the diagnostic.
    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticCode::OracleDb901
            | DiagnosticCode::OracleDb902
            | DiagnosticCode::OracleDb903 => Severity::Hint,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

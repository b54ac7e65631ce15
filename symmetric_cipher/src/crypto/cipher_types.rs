use crate::crypto::cipher_error::CipherError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherMode {
    ECB,
    CBC,
    PCBC,
    CFB,
    OFB,
    CTR,
    RandomDelta,
}

impl CipherMode {
    pub const ALL: [CipherMode; 7] = [
        CipherMode::ECB,
        CipherMode::CBC,
        CipherMode::PCBC,
        CipherMode::CFB,
        CipherMode::OFB,
        CipherMode::CTR,
        CipherMode::RandomDelta,
    ];

    /// Whether blocks can be transformed independently in this direction.
    pub fn is_parallel(self, encrypting: bool) -> bool {
        match self {
            CipherMode::ECB | CipherMode::CTR | CipherMode::RandomDelta => true,
            CipherMode::CBC | CipherMode::CFB => !encrypting,
            CipherMode::PCBC | CipherMode::OFB => false,
        }
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CipherMode::ECB => "ECB",
            CipherMode::CBC => "CBC",
            CipherMode::PCBC => "PCBC",
            CipherMode::CFB => "CFB",
            CipherMode::OFB => "OFB",
            CipherMode::CTR => "CTR",
            CipherMode::RandomDelta => "RandomDelta",
        };
        f.write_str(name)
    }
}

impl FromStr for CipherMode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CipherMode::ALL
            .into_iter()
            .find(|mode| mode.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CipherError::invalid(format!("unknown cipher mode '{s}'")))
    }
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddingMode {
    NoPadding,
    Zeros,
    ANSI_X923,
    PKCS7,
    ISO10126,
}

impl PaddingMode {
    pub const ALL: [PaddingMode; 5] = [
        PaddingMode::NoPadding,
        PaddingMode::Zeros,
        PaddingMode::ANSI_X923,
        PaddingMode::PKCS7,
        PaddingMode::ISO10126,
    ];

    pub fn is_padding(self) -> bool {
        self != PaddingMode::NoPadding
    }
}

impl fmt::Display for PaddingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaddingMode::NoPadding => "NO",
            PaddingMode::Zeros => "ZEROS",
            PaddingMode::ANSI_X923 => "ANSIX923",
            PaddingMode::PKCS7 => "PKCS7",
            PaddingMode::ISO10126 => "ISO10126",
        };
        f.write_str(name)
    }
}

impl FromStr for PaddingMode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_uppercase();
        match normalized.as_str() {
            "NO" | "NONE" | "NOPADDING" => Ok(PaddingMode::NoPadding),
            "ZEROS" => Ok(PaddingMode::Zeros),
            "ANSIX923" => Ok(PaddingMode::ANSI_X923),
            "PKCS7" => Ok(PaddingMode::PKCS7),
            "ISO10126" => Ok(PaddingMode::ISO10126),
            _ => Err(CipherError::invalid(format!("unknown padding mode '{s}'"))),
        }
    }
}

use crate::domain::model::{Code, EncryptedPayload};
use crate::utils::error::{PnrError, Result};
use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::{engine::general_purpose, Engine};

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

/// Key and IV expected by the status service. Both are public constants of
/// the wire format; changing either breaks compatibility with the server.
pub const PAYLOAD_KEY: [u8; 16] = *b"8080808080808080";
pub const PAYLOAD_IV: [u8; 16] = *b"8080808080808080";

/// AES-128-CBC with PKCS#7 padding and a static IV. Deterministic: the same
/// code always produces the same payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadCipher {
    key: [u8; 16],
    iv: [u8; 16],
}

impl Default for PayloadCipher {
    fn default() -> Self {
        Self::new(PAYLOAD_KEY, PAYLOAD_IV)
    }
}

impl PayloadCipher {
    pub const fn new(key: [u8; 16], iv: [u8; 16]) -> Self {
        Self { key, iv }
    }

    pub fn encrypt_code(&self, code: &Code) -> EncryptedPayload {
        let ciphertext = Aes128CbcEnc::new(&self.key.into(), &self.iv.into())
            .encrypt_padded_vec_mut::<Pkcs7>(code.as_str().as_bytes());
        EncryptedPayload(general_purpose::STANDARD.encode(ciphertext))
    }

    pub fn decrypt_payload(&self, payload: &str) -> Result<String> {
        let ciphertext =
            general_purpose::STANDARD
                .decode(payload.trim())
                .map_err(|e| PnrError::Decryption {
                    message: format!("invalid base64: {}", e),
                })?;

        let plaintext = Aes128CbcDec::new(&self.key.into(), &self.iv.into())
            .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
            .map_err(|_| PnrError::Decryption {
                message: "ciphertext is not block aligned or has bad padding".to_string(),
            })?;

        String::from_utf8(plaintext).map_err(|e| PnrError::Decryption {
            message: format!("plaintext is not UTF-8: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(raw: &str) -> Code {
        Code::parse(raw).unwrap()
    }

    #[test]
    fn test_known_vectors() {
        let cipher = PayloadCipher::default();
        assert_eq!(
            cipher.encrypt_code(&code("1234567890")).as_str(),
            "wMwsHgXLg5tFPwaHflF0VQ=="
        );
        assert_eq!(
            cipher.encrypt_code(&code("0987654321")).as_str(),
            "G6gzmo9ieE7h0LVr/2Xr5g=="
        );
    }

    #[test]
    fn test_encryption_is_deterministic() {
        let cipher = PayloadCipher::default();
        let pnr = code("4512398760");
        assert_eq!(cipher.encrypt_code(&pnr), cipher.encrypt_code(&pnr));
    }

    #[test]
    fn test_decrypt_reverses_encrypt() {
        let cipher = PayloadCipher::default();
        for raw in ["1234567890", "ABCDEFGHIJ", "0000000000"] {
            let payload = cipher.encrypt_code(&code(raw));
            assert_eq!(cipher.decrypt_payload(payload.as_str()).unwrap(), raw);
        }
    }

    #[test]
    fn test_ten_bytes_pad_to_one_block() {
        let payload = PayloadCipher::default().encrypt_code(&code("1234567890"));
        let raw = general_purpose::STANDARD.decode(payload.as_str()).unwrap();
        assert_eq!(raw.len(), 16);
    }

    #[test]
    fn test_decrypt_rejects_garbage() {
        let cipher = PayloadCipher::default();
        assert!(matches!(
            cipher.decrypt_payload("not base64!"),
            Err(PnrError::Decryption { .. })
        ));
        // Valid base64 but only 3 bytes, so not block aligned.
        assert!(matches!(
            cipher.decrypt_payload("AAAA"),
            Err(PnrError::Decryption { .. })
        ));
    }

    #[test]
    fn test_other_key_gives_other_payload() {
        let other = PayloadCipher::new(*b"0000000000000000", PAYLOAD_IV);
        let pnr = code("1234567890");
        assert_ne!(
            other.encrypt_code(&pnr),
            PayloadCipher::default().encrypt_code(&pnr)
        );
    }
}

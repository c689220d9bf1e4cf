use rand::Rng;

/// 场次码字母表，去掉了易混淆的 I、O、1、0
pub const SESSION_CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

const PASSWORD_ALPHABET: &[u8] =
    b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnpqrstuvwxyz23456789";

fn sample(alphabet: &[u8], length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
        .collect()
}

/// 生成测验场次码
pub fn generate_session_code(length: usize) -> String {
    sample(SESSION_CODE_ALPHABET, length)
}

/// 场次码归一化：去空白并转大写
pub fn normalize_session_code(input: &str) -> String {
    input.trim().to_ascii_uppercase()
}

/// 生成满足密码策略的随机密码（含大小写字母和数字）
pub fn generate_password(length: usize) -> String {
    let length = length.max(8);
    loop {
        let candidate = sample(PASSWORD_ALPHABET, length);
        if crate::utils::validate::validate_password(&candidate).is_ok() {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_code_uses_unambiguous_alphabet() {
        for _ in 0..200 {
            let code = generate_session_code(6);
            assert_eq!(code.len(), 6);
            assert!(code.bytes().all(|b| SESSION_CODE_ALPHABET.contains(&b)));
            assert!(!code.contains(['I', 'O', '1', '0']));
        }
    }

    #[test]
    fn test_normalize_session_code() {
        assert_eq!(normalize_session_code("  ab3k7z \n"), "AB3K7Z");
        assert_eq!(normalize_session_code("   "), "");
    }

    #[test]
    fn test_generated_password_meets_policy() {
        let password = generate_password(16);
        assert_eq!(password.len(), 16);
        assert!(crate::utils::validate::validate_password(&password).is_ok());
    }
}

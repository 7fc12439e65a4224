//! Console text shown to the user.

use std::fmt::Display;
use std::path::Path;

use crate::report::ResultRecord;
use crate::strength::Strength;

pub const BANNER: &str = "=== Verificador de Senhas Vazadas ===\n";
pub const MODE_PROMPT: &str = "Verificar senha única (1) ou arquivo de senhas (2)? ";
pub const PASSWORD_PROMPT: &str = "Digite a senha (ela não será exibida): ";
pub const PATH_PROMPT: &str = "Digite o caminho do arquivo de senhas (.txt): ";
pub const INVALID_OPTION: &str = "Opção inválida.";
pub const FILE_NOT_FOUND: &str = "❌ Arquivo não encontrado.";

/// Result of the single-password mode.
pub fn single_result(leak_count: u64, strength: Strength) -> String {
    if leak_count > 0 {
        format!("\n⚠️ Sua senha foi encontrada {leak_count} vezes em vazamentos. Força: {strength}.")
    } else {
        format!("\n✅ Sua senha não foi encontrada em vazamentos. Força: {strength}.")
    }
}

/// Announces how many passwords a batch will check.
pub fn batch_start(count: usize) -> String {
    format!("\n🔍 Verificando {count} senha(s)...\n")
}

/// One line per successfully checked password in a batch.
pub fn batch_result(record: &ResultRecord) -> String {
    if record.is_leaked() {
        format!(
            "⚠️ '{}' foi vazada {} vez(es). Força: {}.",
            record.password, record.leak_count, record.strength
        )
    } else {
        format!("✅ '{}' não foi encontrada em vazamentos. Força: {}.", record.password, record.strength)
    }
}

pub fn batch_failure(password: &str, error: &impl Display) -> String {
    format!("Erro ao verificar '{password}': {error}")
}

pub fn report_saved(path: &Path) -> String {
    format!("\n📁 Relatório salvo como '{}'.", path.display())
}

pub fn single_failure(error: &impl Display) -> String {
    format!("❌ Não foi possível verificar a senha: {error}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_result_found() {
        let msg = single_result(3_000_000, Strength::Weak);
        assert!(msg.contains("encontrada 3000000 vezes"));
        assert!(msg.contains("Força: Fraca."));
    }

    #[test]
    fn test_single_result_not_found() {
        let msg = single_result(0, Strength::Strong);
        assert!(msg.contains("não foi encontrada"));
        assert!(msg.contains("Força: Forte."));
    }

    #[test]
    fn test_batch_lines() {
        let leaked = ResultRecord { password: "abc".into(), leak_count: 12, strength: Strength::Weak };
        assert_eq!(batch_result(&leaked), "⚠️ 'abc' foi vazada 12 vez(es). Força: Fraca.");

        let clean = ResultRecord { password: "x".into(), leak_count: 0, strength: Strength::Weak };
        assert_eq!(batch_result(&clean), "✅ 'x' não foi encontrada em vazamentos. Força: Fraca.");

        assert_eq!(batch_failure("abc", &"HTTP 503"), "Erro ao verificar 'abc': HTTP 503");
    }
}

//! Analytical summary prompt
//!
//! Embeds the recent expenses into a fixed instruction block that asks the
//! model for a spending report.

use crate::types::ExpenseRecord;

/// Returned instead of a prompt when there is nothing to analyse
pub const NO_DATA_MESSAGE: &str = "No hay gastos registrados en los últimos 5 días para analizar.";

const INSTRUCTIONS: &str = "\
INSTRUCCIONES PARA EL ANÁLISIS:

1. CÁLCULOS ESTADÍSTICOS:
   - Total gastado en el período
   - Promedio diario de gastos
   - Número total de transacciones
   - Día con mayor gasto

2. ANÁLISIS POR CATEGORÍA:
   - Identifica las categorías con mayor gasto
   - Calcula porcentajes por categoría
   - Detecta patrones de consumo

3. ANÁLISIS POR MÉTODO DE PAGO:
   - Distribución de gastos por método de pago
   - Preferencias de pago identificadas

4. TENDENCIAS Y OBSERVACIONES:
   - Identifica tendencias temporales
   - Señala gastos inusuales o atípicos
   - Proporciona insights sobre hábitos de gasto

5. RECOMENDACIONES:
   - Sugerencias para optimizar gastos
   - Alertas sobre categorías con alto consumo
   - Consejos para el control financiero

FORMATO DE SALIDA:
Usa un formato claro con emojis y secciones bien estructuradas.
Incluye números específicos, porcentajes y análisis contextual.

Por favor, genera un resumen completo y útil basado en estos datos.
";

/// Build the summary prompt for the given records
pub fn build_summary_prompt(records: &[ExpenseRecord]) -> String {
    if records.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }

    let data = serde_json::to_string(records).unwrap_or_default();

    format!(
        "POR FAVOR GENERA UN RESUMEN ANALÍTICO DE LOS GASTOS:\n\n\
         DATOS DE GASTOS DE LOS ÚLTIMOS 5 DÍAS:\n{}\n\n{}",
        data, INSTRUCTIONS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_records_use_fixed_message() {
        assert_eq!(build_summary_prompt(&[]), NO_DATA_MESSAGE);
    }

    #[test]
    fn test_records_are_embedded_as_json() {
        let records = vec![ExpenseRecord {
            date: "2024-01-10".to_string(),
            category: "transport".to_string(),
            amount: 3.0,
            payment_method: "card".to_string(),
        }];

        let prompt = build_summary_prompt(&records);
        assert!(prompt.starts_with("POR FAVOR GENERA UN RESUMEN ANALÍTICO"));
        assert!(prompt.contains(r#""fecha":"2024-01-10""#));
        assert!(prompt.contains(r#""metodo_pago":"card""#));
        assert!(prompt.contains("ANÁLISIS POR MÉTODO DE PAGO"));
    }
}

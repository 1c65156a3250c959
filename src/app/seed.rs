// ==========================================
// LPA Audit System - Default catalog data
// ==========================================
// The factory's initial registry: 8 sectors, their sector-specific
// checklists, a starting roster and one machine per sector. Used to
// populate an empty database so the schedule generator has real
// catalogs to work with.
// ==========================================

use chrono::NaiveDate;

use crate::app::state::AppState;
use crate::domain::types::ItemType;
use crate::domain::{Checklist, ChecklistItem, Employee, Machine, Sector};
use crate::repository::RepositoryResult;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn item(id: &str, question: &str, item_type: ItemType) -> ChecklistItem {
    ChecklistItem {
        id: id.to_string(),
        question: question.to_string(),
        item_type,
    }
}

/// The 8 default sectors, in canonical pattern-index order
pub fn default_sectors() -> Vec<Sector> {
    let rows = [
        ("sec1", "Brochadeira", "ck-broch"),
        ("sec2", "Prensa Ressalto", "ck-prensa"),
        ("sec3", "Estampa Furo", "ck-estampa"),
        ("sec4", "Mandrila", "ck-mandrila"),
        ("sec5", "Fresa Canal", "ck-fresa"),
        ("sec6", "Chanfradeira", "ck-chanfra"),
        ("sec7", "Inspeção Final", "ck-inspecao"),
        ("sec8", "Prensa Curvar", "ck-curvar"),
    ];

    rows.into_iter()
        .map(|(id, name, checklist_id)| Sector {
            id: id.to_string(),
            name: name.to_string(),
            checklist_id: checklist_id.to_string(),
        })
        .collect()
}

/// Starting roster
pub fn default_employees() -> Vec<Employee> {
    let rows = [
        ("emp1", "Carlos Silva", "Operador", "Produção"),
        ("emp2", "Maria Santos", "Técnico", "Manutenção"),
        ("emp3", "João Oliveira", "Operador", "Produção"),
        ("emp4", "Ana Costa", "Supervisor", "Qualidade"),
        ("emp5", "Pedro Lima", "Operador", "Produção"),
        ("emp6", "Fernanda Rocha", "Técnico", "Manutenção"),
        ("emp7", "Roberto Mendes", "Operador", "Estamparia"),
        ("emp8", "Lucia Ferreira", "Supervisor", "Qualidade"),
    ];

    rows.into_iter()
        .map(|(id, name, role, sector)| Employee {
            id: id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            sector: sector.to_string(),
        })
        .collect()
}

/// One registered machine per sector
pub fn default_machines() -> Vec<Machine> {
    let rows = [
        (
            "mach1",
            "Brochadeira #01",
            "BRO-001",
            "Brochadeira",
            "Máquina brochadeira para furações de precisão",
            date(2024, 1, 15),
        ),
        (
            "mach2",
            "Chanfradeira #01",
            "CHA-001",
            "Chanfradeira",
            "Máquina chanfradeira para acabamento de arestas",
            date(2024, 1, 15),
        ),
        (
            "mach3",
            "Prensa Ressalto #01",
            "PRS-001",
            "Prensa Ressalto",
            "Prensa para pressão e ressalto",
            date(2024, 2, 1),
        ),
        (
            "mach4",
            "Inspeção Final #01",
            "INS-001",
            "Inspeção Final",
            "Máquina de inspeção visual e dimensional final",
            date(2024, 2, 10),
        ),
        (
            "mach5",
            "Estampa Furo #01",
            "EST-001",
            "Estampa Furo",
            "Máquina de estamparia para furos",
            date(2024, 3, 1),
        ),
        (
            "mach6",
            "Prensa Curvar #01",
            "PCU-001",
            "Prensa Curvar",
            "Prensa para curvagem de peças",
            date(2024, 3, 15),
        ),
        (
            "mach7",
            "Mandrila #01",
            "MAN-001",
            "Mandrila",
            "Máquina mandrila para acabamento",
            date(2024, 3, 20),
        ),
        (
            "mach8",
            "Fresa Canal #01",
            "FRE-001",
            "Fresa Canal",
            "Máquina fresadora para abertura de canais",
            date(2024, 4, 1),
        ),
    ];

    rows.into_iter()
        .map(|(id, name, code, sector, description, created_at)| Machine {
            id: id.to_string(),
            name: name.to_string(),
            code: code.to_string(),
            sector: sector.to_string(),
            description: description.to_string(),
            created_at,
        })
        .collect()
}

/// Sector-specific audit checklists
pub fn sector_checklists() -> Vec<Checklist> {
    let created = date(2024, 1, 10);

    vec![
        Checklist {
            id: "ck-broch".to_string(),
            name: "Auditoria Brochadeira".to_string(),
            category: "Processo".to_string(),
            level: None,
            created_at: created,
            items: vec![
                item("broch-1", "Proteções de segurança instaladas?", ItemType::OkNok),
                item("broch-2", "Fluido de corte adequado?", ItemType::OkNok),
                item("broch-3", "Tolerância dimensional conforme?", ItemType::OkNok),
                item("broch-4", "Máquina sem ruídos anormais?", ItemType::OkNok),
                item("broch-5", "Observações", ItemType::Text),
            ],
        },
        Checklist {
            id: "ck-prensa".to_string(),
            name: "Auditoria Prensa Ressalto".to_string(),
            category: "Processo".to_string(),
            level: None,
            created_at: created,
            items: vec![
                item("prensa-1", "Pressão hidráulica correta?", ItemType::OkNok),
                item("prensa-2", "Cilindros funcionando?", ItemType::OkNok),
                item("prensa-3", "Peças conformes?", ItemType::OkNok),
                item("prensa-4", "Sensores operacionais?", ItemType::OkNok),
                item("prensa-5", "Observações", ItemType::Text),
            ],
        },
        Checklist {
            id: "ck-estampa".to_string(),
            name: "Auditoria Estampa Furo".to_string(),
            category: "Processo".to_string(),
            level: None,
            created_at: created,
            items: vec![
                item("estampa-1", "Localização dos furos exata?", ItemType::OkNok),
                item("estampa-2", "Rebarbas dentro do limite?", ItemType::OkNok),
                item("estampa-3", "Diâmetro conforme especificação?", ItemType::OkNok),
                item("estampa-4", "Ferramenta sem desgaste excessivo?", ItemType::OkNok),
                item("estampa-5", "Observações", ItemType::Text),
            ],
        },
        Checklist {
            id: "ck-mandrila".to_string(),
            name: "Auditoria Mandrila".to_string(),
            category: "Processo".to_string(),
            level: None,
            created_at: created,
            items: vec![
                item("mandrila-1", "Mandril centrado corretamente?", ItemType::OkNok),
                item("mandrila-2", "Força de aperto uniforme?", ItemType::OkNok),
                item("mandrila-3", "Peça sem defeitos no acabamento?", ItemType::OkNok),
                item("mandrila-4", "Máquina bem lubrificada?", ItemType::OkNok),
                item("mandrila-5", "Observações", ItemType::Text),
            ],
        },
        Checklist {
            id: "ck-fresa".to_string(),
            name: "Auditoria Fresa Canal".to_string(),
            category: "Processo".to_string(),
            level: None,
            created_at: created,
            items: vec![
                item("fresa-1", "Profundidade do canal correta?", ItemType::OkNok),
                item("fresa-2", "Largura do canal dentro da tolerância?", ItemType::OkNok),
                item("fresa-3", "Fresa sem desgaste visível?", ItemType::OkNok),
                item("fresa-4", "RPM adequado?", ItemType::OkNok),
                item("fresa-5", "Observações", ItemType::Text),
            ],
        },
        Checklist {
            id: "ck-chanfra".to_string(),
            name: "Auditoria Chanfradeira".to_string(),
            category: "Processo".to_string(),
            level: None,
            created_at: created,
            items: vec![
                item("chanfra-1", "Ângulo do chanfro conforme?", ItemType::OkNok),
                item("chanfra-2", "Profundidade uniforme?", ItemType::OkNok),
                item("chanfra-3", "Sem rebarbas ou defeitos?", ItemType::OkNok),
                item("chanfra-4", "Ferramenta em bom estado?", ItemType::OkNok),
                item("chanfra-5", "Observações", ItemType::Text),
            ],
        },
        Checklist {
            id: "ck-inspecao".to_string(),
            name: "Auditoria Inspeção Final".to_string(),
            category: "Qualidade".to_string(),
            level: None,
            created_at: created,
            items: vec![
                item("inspecao-1", "Dimensional conforme desenho?", ItemType::OkNok),
                item("inspecao-2", "Acabamento superficial ok?", ItemType::OkNok),
                item("inspecao-3", "Sem defeitos monitorados?", ItemType::OkNok),
                item("inspecao-4", "Rótulo/Rastreabilidade ok?", ItemType::OkNok),
                item("inspecao-5", "Observações", ItemType::Text),
            ],
        },
        Checklist {
            id: "ck-curvar".to_string(),
            name: "Auditoria Prensa Curvar".to_string(),
            category: "Processo".to_string(),
            level: None,
            created_at: created,
            items: vec![
                item("curvar-1", "Ângulo de curvatura correto?", ItemType::OkNok),
                item("curvar-2", "Força de curvatura adequada?", ItemType::OkNok),
                item("curvar-3", "Peça sem trincas ou defeitos?", ItemType::OkNok),
                item("curvar-4", "Matriz/Punção em bom estado?", ItemType::OkNok),
                item("curvar-5", "Observações", ItemType::Text),
            ],
        },
    ]
}

/// Sector checklists plus the general-purpose ones
pub fn default_checklists() -> Vec<Checklist> {
    let mut checklists = sector_checklists();

    checklists.push(Checklist {
        id: "ck1".to_string(),
        name: "Segurança da Máquina".to_string(),
        category: "Segurança".to_string(),
        level: None,
        created_at: date(2024, 1, 10),
        items: vec![
            item("ci1", "Proteções de segurança estão instaladas?", ItemType::OkNok),
            item("ci2", "Botão de emergência está funcional?", ItemType::OkNok),
            item("ci3", "EPIs estão sendo utilizados?", ItemType::OkNok),
            item("ci4", "Observações adicionais", ItemType::Text),
        ],
    });
    checklists.push(Checklist {
        id: "ck2".to_string(),
        name: "5S - Organização".to_string(),
        category: "5S".to_string(),
        level: None,
        created_at: date(2024, 1, 10),
        items: vec![
            item("ci5", "Área de trabalho está limpa?", ItemType::OkNok),
            item("ci6", "Ferramentas estão organizadas?", ItemType::OkNok),
            item("ci7", "Materiais identificados corretamente?", ItemType::OkNok),
        ],
    });
    checklists.push(Checklist {
        id: "ck3".to_string(),
        name: "Qualidade do Processo".to_string(),
        category: "Qualidade".to_string(),
        level: None,
        created_at: date(2024, 1, 15),
        items: vec![
            item("ci8", "Parâmetros de processo estão corretos?", ItemType::OkNok),
            item("ci9", "Peça conforme especificação?", ItemType::OkNok),
            item("ci10", "Registro de controle atualizado?", ItemType::OkNok),
            item("ci11", "Temperatura do processo (°C)", ItemType::Number),
        ],
    });
    checklists.push(Checklist {
        id: "ck4".to_string(),
        name: "Manutenção Preventiva".to_string(),
        category: "Manutenção".to_string(),
        level: None,
        created_at: date(2024, 2, 1),
        items: vec![
            item("ci12", "Lubrificação em dia?", ItemType::OkNok),
            item("ci13", "Ruídos anormais detectados?", ItemType::OkNok),
            item("ci14", "Nível de óleo adequado?", ItemType::OkNok),
            item("ci15", "Filtros limpos?", ItemType::OkNok),
        ],
    });

    checklists
}

/// Populate empty catalogs with the default data
///
/// Each catalog is seeded independently, so a partially populated
/// database keeps whatever was already registered.
pub fn seed_if_empty(state: &AppState) -> RepositoryResult<()> {
    if state.employee_repo.list()?.is_empty() {
        tracing::info!("seeding default employees");
        for employee in default_employees() {
            state.employee_repo.insert(&employee)?;
        }
    }

    if state.sector_repo.list()?.is_empty() {
        tracing::info!("seeding default sectors");
        for sector in default_sectors() {
            state.sector_repo.insert(&sector)?;
        }
    }

    if state.machine_repo.list()?.is_empty() {
        tracing::info!("seeding default machines");
        for machine in default_machines() {
            state.machine_repo.insert(&machine)?;
        }
    }

    if state.checklist_repo.list()?.is_empty() {
        tracing::info!("seeding default checklists");
        for checklist in default_checklists() {
            state.checklist_repo.insert(&checklist)?;
        }
    }

    Ok(())
}

/// Replace every catalog with the default data
pub fn reset_to_defaults(state: &AppState) -> RepositoryResult<()> {
    state.employee_repo.replace_all(&default_employees())?;
    state.sector_repo.replace_all(&default_sectors())?;
    state.machine_repo.replace_all(&default_machines())?;

    for checklist in state.checklist_repo.list()? {
        state.checklist_repo.delete(&checklist.id)?;
    }
    for checklist in default_checklists() {
        state.checklist_repo.insert(&checklist)?;
    }

    Ok(())
}

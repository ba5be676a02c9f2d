//! Etiqueta dinámica de cada artifact y su jerarquía.
//!
//! La jerarquía es:
//! - `BehaviorDescription` -> `Program` -> `CProgram` | `JavaProgram`
//! - `Specification` -> `BehaviorSpecification` | `TestSpecification`
//! - `Justification` -> `Witness` -> `ReachabilityWitness`
//! - `Justification` -> `Condition` -> `TestGoal`
//! - `Justification` -> `TestSuite`
//! - `Verdict`, `AtomicActorDefinition` (raíces sin descendientes)

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactKind {
    BehaviorDescription,
    Program,
    CProgram,
    JavaProgram,
    Specification,
    BehaviorSpecification,
    TestSpecification,
    Justification,
    Witness,
    ReachabilityWitness,
    Condition,
    TestGoal,
    TestSuite,
    Verdict,
    AtomicActorDefinition,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 15] = [ArtifactKind::BehaviorDescription,
                                         ArtifactKind::Program,
                                         ArtifactKind::CProgram,
                                         ArtifactKind::JavaProgram,
                                         ArtifactKind::Specification,
                                         ArtifactKind::BehaviorSpecification,
                                         ArtifactKind::TestSpecification,
                                         ArtifactKind::Justification,
                                         ArtifactKind::Witness,
                                         ArtifactKind::ReachabilityWitness,
                                         ArtifactKind::Condition,
                                         ArtifactKind::TestGoal,
                                         ArtifactKind::TestSuite,
                                         ArtifactKind::Verdict,
                                         ArtifactKind::AtomicActorDefinition];

    pub fn name(self) -> &'static str {
        match self {
            ArtifactKind::BehaviorDescription => "BehaviorDescription",
            ArtifactKind::Program => "Program",
            ArtifactKind::CProgram => "CProgram",
            ArtifactKind::JavaProgram => "JavaProgram",
            ArtifactKind::Specification => "Specification",
            ArtifactKind::BehaviorSpecification => "BehaviorSpecification",
            ArtifactKind::TestSpecification => "TestSpecification",
            ArtifactKind::Justification => "Justification",
            ArtifactKind::Witness => "Witness",
            ArtifactKind::ReachabilityWitness => "ReachabilityWitness",
            ArtifactKind::Condition => "Condition",
            ArtifactKind::TestGoal => "TestGoal",
            ArtifactKind::TestSuite => "TestSuite",
            ArtifactKind::Verdict => "Verdict",
            ArtifactKind::AtomicActorDefinition => "AtomicActorDefinition",
        }
    }

    /// Busca un kind por su nombre en el lenguaje de pipelines.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }

    pub fn parent(self) -> Option<Self> {
        match self {
            ArtifactKind::Program => Some(ArtifactKind::BehaviorDescription),
            ArtifactKind::CProgram | ArtifactKind::JavaProgram => Some(ArtifactKind::Program),
            ArtifactKind::BehaviorSpecification | ArtifactKind::TestSpecification => Some(ArtifactKind::Specification),
            ArtifactKind::Witness | ArtifactKind::Condition | ArtifactKind::TestSuite => Some(ArtifactKind::Justification),
            ArtifactKind::ReachabilityWitness => Some(ArtifactKind::Witness),
            ArtifactKind::TestGoal => Some(ArtifactKind::Condition),
            ArtifactKind::BehaviorDescription
            | ArtifactKind::Specification
            | ArtifactKind::Justification
            | ArtifactKind::Verdict
            | ArtifactKind::AtomicActorDefinition => None,
        }
    }

    /// `true` si `self` es `ancestor` o desciende de él.
    pub fn is_a(self, ancestor: ArtifactKind) -> bool {
        let mut current = Some(self);
        while let Some(k) = current {
            if k == ancestor {
                return true;
            }
            current = k.parent();
        }
        false
    }

    pub fn is_joinable(self) -> bool {
        matches!(self, ArtifactKind::TestGoal | ArtifactKind::TestSuite)
    }

    pub fn is_program(self) -> bool {
        self.is_a(ArtifactKind::Program)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! # ⚛️ qubit-core — Single-Qubit State Engine
//!
//! Estado matemático de um qubit: par de amplitudes complexas, portas
//! H/X/Y/Z, probabilidades de medição nas bases Z, X e Y, e coordenadas na
//! esfera de Bloch.
//!
//! ## Computational Complexity
//!
//! Todas as operações são O(1) sobre valores `Copy` de tamanho fixo: sem
//! alocação, sem I/O, sem estado global mutável.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          QubitEngine (ids textuais, tracing)    │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  QubitState { alpha, beta }               │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌──────────┐ ┌──────────┐ ┌────────────────┐  │
//! │  │  Gate    │ │  Basis   │ │ BlochCoordinate│  │
//! │  └──────────┘ └──────────┘ └────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Concorrência
//!
//! Cada operação devolve um novo `QubitState`; nada é alterado no lugar.
//! Leitores concorrentes (ex.: um laço de renderização) podem guardar
//! cópias independentes sem sincronização. Publicar o estado mais recente
//! de forma atômica é responsabilidade de quem chama.
//!
//! ## Exemplo
//!
//! ```
//! use qubit_core::{Basis, Gate, QubitEngine, QubitState};
//!
//! let engine = QubitEngine::new();
//! let state = engine.construct(1.0, 0.0, 0.0, 0.0);
//! let plus = engine.apply_gate(&state, "H").unwrap();
//!
//! let x = plus.measure(Basis::X);
//! assert!((x.probabilities[0] - 1.0).abs() < 1e-9);
//!
//! let bloch = engine.to_bloch(&plus);
//! assert!((bloch.x - 1.0).abs() < 1e-9);
//!
//! assert_eq!(QubitState::zero().apply(Gate::PauliX), QubitState::one());
//! ```

pub mod bloch;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod gates;
pub mod measure;
pub mod state;

pub use bloch::BlochCoordinate;
pub use config::EngineConfig;
pub use engine::QubitEngine;
pub use error::{QubitError, QubitResult};
pub use format::{format_amplitude, FormattedAmplitude};
pub use gates::{Gate, Matrix2x2};
pub use measure::{Basis, MeasurementResult};
pub use state::{Amplitude, QubitState};

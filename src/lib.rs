//! 동위원소 방식과 기존 방식을 비교하는 ROI 계산 엔진과 그 참조 데이터.
//! 계산 로직은 라이브러리에 두고 CLI는 얇은 껍데기로 유지한다.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod i18n;
pub mod industry;
pub mod market_data;
pub mod simulation;
pub mod ui_cli;

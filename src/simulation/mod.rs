//! ROI 시뮬레이션 엔진. 입력과 참조 테이블만으로 결과를 만드는 순수 함수 모음.

pub mod chart;
pub mod currency;
pub mod diagnostics;
pub mod inputs;
pub mod roi;

pub use chart::*;
pub use currency::*;
pub use diagnostics::*;
pub use inputs::*;
pub use roi::*;

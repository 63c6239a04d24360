//! # slide_dict
//!
//! 제스처 타이핑(슬라이드 입력)용 사전 생성 라이브러리.
//!
//! 단어 하나를 키보드 위의 꺾은선 경로로 바꾸고, 호 길이 기준으로 리샘플링한 뒤
//! 웨이블릿 계수 몇 개로 경로 모양을 요약합니다.
//!
//! - [`ops`]: 경로 기하와 리샘플링
//! - [`transform`]: 웨이블릿 필터, 패킷/고속 변환, 고대 이집트 분해, 2D/3D 확장
//! - [`slide`]: 키보드 레이아웃, 단어 목록, 추출기, 배치 처리, 출력 형식

pub mod error;
pub mod ops;
pub mod slide;
pub mod transform;

pub use error::{LayoutError, SlideError, SlideResult, TransformError, TransformResult};
pub use slide::{
    normalize_word, process_words, BatchReport, KeyLayout, SlideConfig, SlideExtractor,
    SlideParameters,
};
pub use transform::{AncientEgyptianDecomposition, Haar, Transform, Wavelet};

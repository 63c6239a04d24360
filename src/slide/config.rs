use crate::ops::resample::DEFAULT_RESAMPLE_COUNT;

/// Per-segment transform wrapped by the decomposition engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformKind {
    /// 피라미드형 고속 웨이블릿 변환 (근사 대역만 재귀)
    #[default]
    FastWavelet,
    /// 웨이블릿 패킷 변환 (모든 대역 재귀)
    Packet,
    /// 필터 한 단계만 적용
    SingleStep,
}

/// What the extractor emits for each word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterMode {
    /// reserved slot + leading wavelet coefficients of x and y
    #[default]
    Wavelet,
    /// the resampled x axis followed by the resampled y axis
    Resampled,
}

/// 슬라이드 파라미터 추출 설정
#[derive(Debug, Clone)]
pub struct SlideConfig {
    /// 호 길이 리샘플링 점 개수
    pub resample_count: usize,

    /// 축마다 출력에 남길 선행 계수 개수
    pub coefficients_per_axis: usize,

    /// 출력 앞의 예약 슬롯 개수 (항상 0.0)
    pub reserved_slots: usize,

    /// 분해 엔진이 감쌀 변환
    pub transform: TransformKind,

    /// 레벨 제한 (None 이면 끝까지)
    pub levels: Option<usize>,

    pub mode: ParameterMode,

    /// 단어 단위 병렬 처리 활성화
    pub parallel: bool,
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            resample_count: DEFAULT_RESAMPLE_COUNT,
            coefficients_per_axis: 8,
            reserved_slots: 1,
            transform: TransformKind::FastWavelet,
            levels: None,
            mode: ParameterMode::Wavelet,
            parallel: true,
        }
    }
}

impl SlideConfig {
    /// Length of every vector the extractor produces under this config.
    pub fn vector_len(&self) -> usize {
        match self.mode {
            ParameterMode::Wavelet => {
                self.reserved_slots + 2 * self.coefficients_per_axis.min(self.resample_count)
            }
            ParameterMode::Resampled => 2 * self.resample_count,
        }
    }
}

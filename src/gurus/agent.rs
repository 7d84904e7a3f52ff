//! Guru agent implementations
//!
//! A closed set of guru agents, one variant per predefined guru plus a
//! generic fallback. Each predefined variant carries a fixed profile and a
//! canned list of recommendations reflecting that guru's philosophy; no
//! market data is fetched and nothing is computed. The generic variant
//! returns no recommendations.

use super::recommendation::Recommendation;
use serde_json::{json, Value};

/// Descriptive metadata for a guru, set once at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuruProfile {
    pub display_name: String,
    pub philosophy: String,
    pub expertise: String,
    pub risk_profile: String,
    pub analysis_style: String,
}

/// A guru agent, selected by display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuruAgent {
    WarrenBuffett,
    PeterLynch,
    CathieWood,
    RayDalio,
    BenjaminGraham,
    Generic { profile: GuruProfile },
}

impl GuruAgent {
    /// Select an agent by exact display name.
    ///
    /// Unknown names get a generic agent carrying the requested name and
    /// placeholder profile fields. Always constructible.
    pub fn for_display_name(display_name: &str) -> Self {
        match display_name {
            "워렌 버핏" => GuruAgent::WarrenBuffett,
            "피터 린치" => GuruAgent::PeterLynch,
            "캐시 우드" => GuruAgent::CathieWood,
            "레이 달리오" => GuruAgent::RayDalio,
            "벤자민 그레이엄" => GuruAgent::BenjaminGraham,
            other => GuruAgent::Generic {
                profile: GuruProfile {
                    display_name: other.to_string(),
                    philosophy: "균형잡힌 투자".to_string(),
                    expertise: "다양한 섹터".to_string(),
                    risk_profile: "중간".to_string(),
                    analysis_style: "기본적 분석".to_string(),
                },
            },
        }
    }

    /// The display names of the predefined gurus
    pub fn available_display_names() -> Vec<&'static str> {
        vec![
            "워렌 버핏",
            "피터 린치",
            "캐시 우드",
            "레이 달리오",
            "벤자민 그레이엄",
        ]
    }

    pub fn profile(&self) -> GuruProfile {
        match self {
            GuruAgent::WarrenBuffett => GuruProfile {
                display_name: "워렌 버핏".to_string(),
                philosophy: "가치투자, 장기보유, 경쟁우위가 있는 기업".to_string(),
                expertise: "소비재, 금융, 보험, 에너지".to_string(),
                risk_profile: "보수적, 안정성 중시".to_string(),
                analysis_style: "기본적 분석, 경영진 품질 중시, 단순하고 이해하기 쉬운 비즈니스 선호"
                    .to_string(),
            },
            GuruAgent::PeterLynch => GuruProfile {
                display_name: "피터 린치".to_string(),
                philosophy: "성장투자, 개인이 알고 있는 분야 투자".to_string(),
                expertise: "소매, 소비재, 기술".to_string(),
                risk_profile: "중간, 성장 잠재력 중시".to_string(),
                analysis_style: "상식적 접근, PEG 비율 활용, 스토리가 있는 기업 선호".to_string(),
            },
            GuruAgent::CathieWood => GuruProfile {
                display_name: "캐시 우드".to_string(),
                philosophy: "파괴적 혁신, 지수적 성장 기술".to_string(),
                expertise: "AI, 로보틱스, 바이오테크, 블록체인".to_string(),
                risk_profile: "공격적, 고위험 고수익".to_string(),
                analysis_style: "기술 트렌드 분석, 장기 성장 잠재력, 혁신 주기 파악".to_string(),
            },
            GuruAgent::RayDalio => GuruProfile {
                display_name: "레이 달리오".to_string(),
                philosophy: "분산투자, 거시경제 기반 투자".to_string(),
                expertise: "글로벌 매크로, 채권, 원자재".to_string(),
                risk_profile: "중간, 리스크 패리티".to_string(),
                analysis_style: "거시경제 분석, 시스템적 접근, 원칙 기반 투자".to_string(),
            },
            GuruAgent::BenjaminGraham => GuruProfile {
                display_name: "벤자민 그레이엄".to_string(),
                philosophy: "절대적 가치투자, 안전마진 확보".to_string(),
                expertise: "다양한 섹터, 저평가 자산 발굴".to_string(),
                risk_profile: "매우 보수적, 손실 최소화 우선".to_string(),
                analysis_style: "정량적 분석, 재무제표 중심, 시장 감정과 반대 방향".to_string(),
            },
            GuruAgent::Generic { profile } => profile.clone(),
        }
    }

    /// The guru's canned top picks.
    ///
    /// Each predefined variant returns exactly two fully-populated records;
    /// the generic variant returns an empty list.
    pub fn recommendations(&self) -> Vec<Recommendation> {
        match self {
            GuruAgent::WarrenBuffett => buffett_recommendations(),
            GuruAgent::PeterLynch => lynch_recommendations(),
            GuruAgent::CathieWood => wood_recommendations(),
            GuruAgent::RayDalio => dalio_recommendations(),
            GuruAgent::BenjaminGraham => graham_recommendations(),
            GuruAgent::Generic { .. } => Vec::new(),
        }
    }

    /// Full analysis envelope: guru, philosophy, top picks, and a summary line
    pub fn analysis(&self) -> Value {
        let profile = self.profile();
        let top_picks: Vec<Value> = self
            .recommendations()
            .iter()
            .map(|rec| json!(rec.to_map()))
            .collect();

        json!({
            "guru": profile.display_name,
            "philosophy": profile.philosophy,
            "top_picks": top_picks,
            "analysis_summary": format!(
                "{}의 관점에서 AI 에이전트 시대 투자 분석",
                profile.display_name
            ),
        })
    }

    /// Acknowledge another guru's analysis.
    ///
    /// Returns a fixed-shape envelope with empty agreement and disagreement
    /// lists; cross-examination content is synthesized by the runtime, not
    /// here.
    pub fn respond_to_peer(&self, peer_name: &str, _peer_analysis: &Value) -> Value {
        let name = self.profile().display_name;
        json!({
            "responding_guru": name,
            "target_guru": peer_name,
            "response": format!("{}의 {}에 대한 응답", name, peer_name),
            "agreement_points": [],
            "disagreement_points": [],
            "additional_insights": "",
        })
    }
}

/// 버핏 스타일: 안정적이고 이해하기 쉬운 비즈니스
fn buffett_recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            company_name: "Microsoft Corporation".to_string(),
            ticker: "MSFT".to_string(),
            sector: "클라우드 컴퓨팅 플랫폼".to_string(),
            investment_thesis: "AI 에이전트의 필수 인프라인 클라우드 플랫폼을 독점적으로 제공. \
                안정적인 수익 모델과 강력한 경쟁 해자를 보유."
                .to_string(),
            competitive_advantage: "Azure 클라우드 생태계, Office 365 통합, OpenAI 파트너십을 통한 \
                AI 시장 선점"
                .to_string(),
            financial_analysis: "꾸준한 현금흐름, 높은 이익률, 배당 성장 기록. PER 25배 수준으로 \
                합리적 밸류에이션"
                .to_string(),
            risk_factors: "클라우드 경쟁 심화, 규제 리스크".to_string(),
            target_price: None,
            time_horizon: "10년 이상".to_string(),
        },
        Recommendation {
            company_name: "Berkshire Hathaway".to_string(),
            ticker: "BRK.B".to_string(),
            sector: "다각화 지주회사".to_string(),
            investment_thesis: "AI 혁명 과정에서도 변하지 않는 핵심 사업들(보험, 철도, 에너지)을 \
                보유. AI 시대에도 필요한 기본 인프라 제공"
                .to_string(),
            competitive_advantage: "다각화된 사업 포트폴리오, 강력한 현금 창출 능력, 우수한 자본 \
                배분 능력"
                .to_string(),
            financial_analysis: "저평가된 상태, 강력한 대차대조표, 지속적인 주주가치 창출"
                .to_string(),
            risk_factors: "경영진 승계 리스크, 거시경제 변화".to_string(),
            target_price: None,
            time_horizon: "영구보유".to_string(),
        },
    ]
}

/// 린치 스타일: 성장 잠재력이 큰 이해하기 쉬운 기업
fn lynch_recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            company_name: "Taiwan Semiconductor".to_string(),
            ticker: "TSM".to_string(),
            sector: "반도체 파운드리".to_string(),
            investment_thesis: "AI 에이전트가 필요로 하는 모든 칩을 만드는 '칩의 공장'. 간단하고 \
                이해하기 쉬운 비즈니스 모델"
                .to_string(),
            competitive_advantage: "세계 최고의 반도체 제조 기술, 고객사 종속성 높음, 진입장벽 \
                극히 높음"
                .to_string(),
            financial_analysis: "PEG 1.2 수준으로 합리적, 꾸준한 성장과 높은 마진 유지".to_string(),
            risk_factors: "지정학적 리스크, 자본집약적 사업".to_string(),
            target_price: None,
            time_horizon: "5-7년".to_string(),
        },
        Recommendation {
            company_name: "Salesforce".to_string(),
            ticker: "CRM".to_string(),
            sector: "CRM 및 클라우드 소프트웨어".to_string(),
            investment_thesis: "모든 기업이 AI 에이전트를 도입할 때 필요한 고객 데이터 플랫폼. \
                'AI 에이전트의 메모리' 역할"
                .to_string(),
            competitive_advantage: "고객 데이터 플랫폼 독점, 높은 전환비용, AI 기능 통합 가속화"
                .to_string(),
            financial_analysis: "성장률 대비 밸류에이션 매력적, 구독 모델로 예측 가능한 수익"
                .to_string(),
            risk_factors: "경쟁 심화, 고객 이탈 위험".to_string(),
            target_price: None,
            time_horizon: "3-5년".to_string(),
        },
    ]
}

/// 우드 스타일: 파괴적 혁신 기술 기업
fn wood_recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            company_name: "NVIDIA Corporation".to_string(),
            ticker: "NVDA".to_string(),
            sector: "AI 컴퓨팅 하드웨어".to_string(),
            investment_thesis: "AI 에이전트 혁명의 절대적 인프라. 모든 AI 모델 훈련과 추론에 \
                필수적인 GPU 독점 공급"
                .to_string(),
            competitive_advantage: "CUDA 소프트웨어 생태계, AI 칩 설계 노하우, 네트워크 효과"
                .to_string(),
            financial_analysis: "매출 폭증, 마진 확대, AI 시장 성장과 함께 지수적 성장 가능"
                .to_string(),
            risk_factors: "밸류에이션 부담, 경쟁 칩 등장 가능성".to_string(),
            target_price: None,
            time_horizon: "10년".to_string(),
        },
        Recommendation {
            company_name: "Palantir Technologies".to_string(),
            ticker: "PLTR".to_string(),
            sector: "데이터 분석 플랫폼".to_string(),
            investment_thesis: "AI 에이전트가 의사결정하기 위해 필요한 데이터 통합 및 분석 플랫폼. \
                정부와 기업의 AI 도입 필수 도구"
                .to_string(),
            competitive_advantage: "복잡한 데이터 통합 기술, 높은 고객 의존도, 정부 계약 안정성"
                .to_string(),
            financial_analysis: "매출 성장 가속화, 수익성 개선 추세, AI 붐과 함께 재평가 가능"
                .to_string(),
            risk_factors: "정부 의존도, 경쟁 심화".to_string(),
            target_price: None,
            time_horizon: "5-10년".to_string(),
        },
    ]
}

/// 달리오 스타일: 거시경제적 관점의 인프라 투자
fn dalio_recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            company_name: "Amazon Web Services (Amazon)".to_string(),
            ticker: "AMZN".to_string(),
            sector: "클라우드 인프라".to_string(),
            investment_thesis: "AI 에이전트 시대의 핵심 인프라. 글로벌 클라우드 1위로 모든 AI \
                워크로드의 기반"
                .to_string(),
            competitive_advantage: "글로벌 인프라 규모, 다양한 AI 서비스 포트폴리오, 생태계 \
                네트워크 효과"
                .to_string(),
            financial_analysis: "AWS 부문 고마진 성장, 전체 그룹 밸류 재평가 여지".to_string(),
            risk_factors: "클라우드 경쟁, 규제 리스크, 거시경제 둔화".to_string(),
            target_price: None,
            time_horizon: "7-10년".to_string(),
        },
        Recommendation {
            company_name: "Alphabet Inc.".to_string(),
            ticker: "GOOGL".to_string(),
            sector: "인터넷 플랫폼 및 AI".to_string(),
            investment_thesis: "AI 에이전트가 정보를 얻는 주요 통로. 검색과 광고 플랫폼을 통해 \
                AI 경제의 수혜자"
                .to_string(),
            competitive_advantage: "검색 독점, 데이터 네트워크 효과, AI 연구 역량".to_string(),
            financial_analysis: "현재 밸류에이션 매력적, AI 투자 대비 저평가".to_string(),
            risk_factors: "광고 시장 변화, AI 경쟁, 규제 압력".to_string(),
            target_price: None,
            time_horizon: "5-8년".to_string(),
        },
    ]
}

/// 그레이엄 스타일: 저평가된 안전한 인프라 기업
fn graham_recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            company_name: "Intel Corporation".to_string(),
            ticker: "INTC".to_string(),
            sector: "반도체".to_string(),
            investment_thesis: "AI 붐에 뒤처졌지만 여전히 필수적인 CPU와 데이터센터 인프라 제공. \
                현재 과도하게 저평가"
                .to_string(),
            competitive_advantage: "x86 아키텍처 독점, 파운드리 사업 확장, 정부 지원".to_string(),
            financial_analysis: "PBR 1.5배, 배당수익률 5% 이상, 자산가치 대비 저평가".to_string(),
            risk_factors: "기술 경쟁력 격차, 시장점유율 하락".to_string(),
            target_price: None,
            time_horizon: "3-5년".to_string(),
        },
        Recommendation {
            company_name: "International Business Machines".to_string(),
            ticker: "IBM".to_string(),
            sector: "엔터프라이즈 IT 서비스".to_string(),
            investment_thesis: "기업들이 AI를 도입할 때 필요한 컨설팅과 시스템 통합 서비스. \
                안정적 배당과 저평가"
                .to_string(),
            competitive_advantage: "기업 고객 관계, AI 컨설팅 역량, 하이브리드 클라우드".to_string(),
            financial_analysis: "낮은 PER, 높은 배당수익률, 안정적 현금흐름".to_string(),
            risk_factors: "레거시 사업 의존, 성장 둔화".to_string(),
            target_price: None,
            time_horizon: "3-5년".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_exact_match() {
        assert_eq!(
            GuruAgent::for_display_name("워렌 버핏"),
            GuruAgent::WarrenBuffett
        );
        assert_eq!(
            GuruAgent::for_display_name("캐시 우드"),
            GuruAgent::CathieWood
        );
        // Identifier-style names are NOT display names: factory matching is exact
        assert!(matches!(
            GuruAgent::for_display_name("warren_buffett"),
            GuruAgent::Generic { .. }
        ));
    }

    #[test]
    fn test_generic_fallback_carries_requested_name() {
        let agent = GuruAgent::for_display_name("일론 머스크");
        let profile = agent.profile();
        assert_eq!(profile.display_name, "일론 머스크");
        assert_eq!(profile.philosophy, "균형잡힌 투자");
    }

    #[test]
    fn test_available_display_names() {
        let names = GuruAgent::available_display_names();
        assert_eq!(names.len(), 5);
        assert!(names.contains(&"워렌 버핏"));
        assert!(names.contains(&"벤자민 그레이엄"));
    }

    #[test]
    fn test_each_predefined_guru_has_two_picks() {
        for name in GuruAgent::available_display_names() {
            let agent = GuruAgent::for_display_name(name);
            let recs = agent.recommendations();
            assert_eq!(recs.len(), 2, "{} should have two picks", name);
            for rec in &recs {
                assert!(!rec.company_name.is_empty());
                assert!(!rec.ticker.is_empty());
                assert!(!rec.investment_thesis.is_empty());
                assert!(!rec.risk_factors.is_empty());
            }
        }
    }

    #[test]
    fn test_generic_guru_has_no_picks() {
        let agent = GuruAgent::for_display_name("unknown investor");
        assert!(agent.recommendations().is_empty());
    }

    #[test]
    fn test_analysis_envelope() {
        let analysis = GuruAgent::WarrenBuffett.analysis();
        assert_eq!(analysis["guru"], "워렌 버핏");
        assert_eq!(analysis["top_picks"].as_array().unwrap().len(), 2);
        assert_eq!(
            analysis["top_picks"][0]["ticker"].as_str().unwrap(),
            "MSFT"
        );
        assert!(analysis["analysis_summary"]
            .as_str()
            .unwrap()
            .contains("워렌 버핏"));
    }

    #[test]
    fn test_respond_to_peer_envelope() {
        let response =
            GuruAgent::CathieWood.respond_to_peer("워렌 버핏", &serde_json::json!({"x": 1}));
        assert_eq!(response["responding_guru"], "캐시 우드");
        assert_eq!(response["target_guru"], "워렌 버핏");
        assert!(response["agreement_points"].as_array().unwrap().is_empty());
        assert!(response["disagreement_points"]
            .as_array()
            .unwrap()
            .is_empty());
        assert_eq!(response["additional_insights"], "");
    }
}

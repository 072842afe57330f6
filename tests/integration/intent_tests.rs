//! Intent classification and routing integration tests
//!
//! Tests the full path from a free-text message to an intent category
//! and a set of navigation suggestions.

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use workbench_rs::core::intent::{
        canned_response, navigation_option, resolve_suggestions, IntentAnalysis,
        NAVIGATION_OPTIONS,
    };
    use workbench_rs::{
        detect_intent, generate_routing_suggestions, Intent, NavigationKey,
    };

    // ==================== Classification ====================

    /// Test that technical vocabulary lands in IT support
    #[test]
    fn test_technical_message_is_it_support() {
        let analysis = detect_intent("my printer is broken and the wifi is not working");

        assert_eq!(analysis.intent, Intent::ItSupport);
        assert!(analysis.confidence > 0.0);
        assert!(analysis.keywords.contains(&"printer".to_string()));
        assert!(analysis.keywords.contains(&"not working".to_string()));
    }

    /// Test that document questions land in the resources category
    #[test]
    fn test_document_question_is_resources_specific() {
        let analysis = detect_intent("where is the pip form");

        assert_eq!(analysis.intent, Intent::ResourcesSpecific);
        assert!(analysis.keywords.contains(&"pip form".to_string()));
    }

    /// Test that learning questions land in AI learning
    #[test]
    fn test_learning_message_is_ai_learning() {
        let analysis = detect_intent("I want to learn about artificial intelligence");

        assert_eq!(analysis.intent, Intent::AiLearning);
        assert!(analysis
            .keywords
            .contains(&"artificial intelligence".to_string()));
    }

    /// Test that matching is case-insensitive
    #[test]
    fn test_classification_ignores_case() {
        let lower = detect_intent("printer broken wifi");
        let upper = detect_intent("PRINTER BROKEN WIFI");

        assert_eq!(lower.intent, upper.intent);
        assert_eq!(lower.keywords, upper.keywords);
    }

    /// Test the confidence formula: matched keywords over list size
    #[test]
    fn test_confidence_is_keyword_recall() {
        let analysis = detect_intent("printer broken wifi");

        assert_eq!(analysis.intent, Intent::ItSupport);
        assert_eq!(analysis.keywords.len(), 3);
        assert_approx_eq!(analysis.confidence, 3.0 / 28.0);
    }

    /// Test that matched keywords come back in table order
    #[test]
    fn test_keywords_keep_table_order() {
        let analysis = detect_intent("wifi printer broken");

        assert_eq!(
            analysis.keywords,
            vec![
                "broken".to_string(),
                "printer".to_string(),
                "wifi".to_string()
            ]
        );
    }

    /// Test that an unmatched message is GENERAL at zero confidence
    #[test]
    fn test_unmatched_message_is_general() {
        let analysis = detect_intent("xyzzy quux");

        assert_eq!(analysis.intent, Intent::General);
        assert_eq!(analysis.confidence, 0.0);
        assert!(analysis.keywords.is_empty());
    }

    /// Test an empty message
    #[test]
    fn test_empty_message_is_general() {
        let analysis = detect_intent("");

        assert_eq!(analysis.intent, Intent::General);
        assert_eq!(analysis.confidence, 0.0);
    }

    // ==================== Routing Suggestions ====================

    /// Test that a confident intent leads with its own target
    #[test]
    fn test_confident_intent_leads_with_primary_target() {
        let suggestions = generate_routing_suggestions(Intent::ItSupport, 0.5);

        assert_eq!(
            suggestions,
            vec![
                NavigationKey::ItSupport,
                NavigationKey::Dashboard,
                NavigationKey::AiLearning
            ]
        );
    }

    /// Test that low confidence drops the primary target
    #[test]
    fn test_low_confidence_drops_primary_target() {
        let suggestions = generate_routing_suggestions(Intent::ItSupport, 0.1);

        assert!(!suggestions.contains(&NavigationKey::ItSupport));
        assert_eq!(suggestions[0], NavigationKey::Dashboard);
    }

    /// Test that the dashboard is always suggested
    #[test]
    fn test_dashboard_is_always_suggested() {
        for intent in [
            Intent::ItSupport,
            Intent::AiLearning,
            Intent::TimeTracking,
            Intent::General,
        ] {
            for confidence in [0.0, 0.15, 0.5, 1.0] {
                let suggestions = generate_routing_suggestions(intent, confidence);
                assert!(
                    suggestions.contains(&NavigationKey::Dashboard),
                    "No dashboard for {} at {}",
                    intent,
                    confidence
                );
            }
        }
    }

    /// Test that intents without a page of their own fall back to the dashboard
    #[test]
    fn test_pageless_intent_falls_back_to_dashboard() {
        let suggestions = generate_routing_suggestions(Intent::TimeTracking, 0.9);

        assert_eq!(suggestions, vec![NavigationKey::Dashboard]);
    }

    /// Test that suggestions never exceed three entries
    #[test]
    fn test_suggestions_cap_at_three() {
        for intent in [
            Intent::ItSupport,
            Intent::AiLearning,
            Intent::Innovation,
            Intent::HrSupport,
            Intent::Assessments,
        ] {
            let suggestions = generate_routing_suggestions(intent, 1.0);
            assert!(suggestions.len() <= 3);
        }
    }

    /// Test that every navigation key resolves to its own option
    #[test]
    fn test_navigation_table_is_consistent() {
        for option in NAVIGATION_OPTIONS {
            let resolved = navigation_option(option.key);
            assert_eq!(resolved.key, option.key);
            assert!(!resolved.path.is_empty());
            assert!(!resolved.title.is_empty());
        }
    }

    /// Test resolving suggestion keys into full options
    #[test]
    fn test_resolve_suggestions_keeps_order() {
        let resolved = resolve_suggestions(&[
            NavigationKey::ItSupport,
            NavigationKey::Dashboard,
        ]);

        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].path, "/support");
        assert_eq!(resolved[1].path, "/");
    }

    // ==================== Scripted Replies ====================

    /// Test that a confident IT message gets the ticket pointer
    #[test]
    fn test_it_support_script() {
        let message = "My printer is broken, the wifi has issues and I cant access \
                       my email, please help fix this error";
        let analysis = detect_intent(message);
        assert_eq!(analysis.intent, Intent::ItSupport);
        assert!(analysis.confidence > 0.3);

        let reply = canned_response(message, &analysis);
        assert!(reply.is_some());
        assert!(reply.unwrap().contains("Submit a Ticket"));
    }

    /// Test that time-tracking questions point at Track My Time
    #[test]
    fn test_time_tracking_script() {
        let message = "how do I clock in and clock out hours on my timesheet in sprout";
        let analysis = detect_intent(message);
        assert_eq!(analysis.intent, Intent::TimeTracking);

        let reply = canned_response(message, &analysis);
        assert!(reply.is_some());
        assert!(reply.unwrap().contains("Track My Time"));
    }

    /// Test the document-specific script branches
    #[test]
    fn test_resources_script_branches_on_document() {
        let analysis = IntentAnalysis {
            intent: Intent::ResourcesSpecific,
            confidence: 0.5,
            keywords: vec![],
        };

        let pip = canned_response("where is the pip form", &analysis);
        assert!(pip.unwrap().contains("Supervisor Tool Kit"));

        let leave = canned_response("what is the leave policy", &analysis);
        assert!(leave.unwrap().contains("Important Reading Manuals"));

        let payroll = canned_response("how do I check payroll", &analysis);
        assert!(payroll.unwrap().contains("Important Tools"));
    }

    /// Test that low confidence yields no script
    #[test]
    fn test_low_confidence_has_no_script() {
        let analysis = IntentAnalysis {
            intent: Intent::ItSupport,
            confidence: 0.2,
            keywords: vec![],
        };

        assert!(canned_response("hello", &analysis).is_none());
    }

    /// Test that GENERAL never scripts a reply
    #[test]
    fn test_general_has_no_script() {
        let analysis = IntentAnalysis {
            intent: Intent::General,
            confidence: 1.0,
            keywords: vec![],
        };

        assert!(canned_response("hello", &analysis).is_none());
    }
}
